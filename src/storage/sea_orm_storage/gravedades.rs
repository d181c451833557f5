use super::SeaOrmStorage;
use crate::entity::tipos_gravedad::{ActiveModel, Column, Entity as Gravedades};
use crate::errors::{ControlEduError, Result};
use crate::models::gravedades::entities::TipoGravedad;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// Listar niveles de gravedad ordenados por nombre
    pub async fn list_gravedades_impl(&self) -> Result<Vec<TipoGravedad>> {
        let result = Gravedades::find()
            .order_by_asc(Column::NombreGravedad)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar gravedades: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_gravedad()).collect())
    }

    /// Buscar nivel de gravedad por ID
    pub async fn get_gravedad_by_id_impl(&self, id: i64) -> Result<Option<TipoGravedad>> {
        let result = Gravedades::find_by_id(id).one(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo buscar gravedad: {e}"))
        })?;

        Ok(result.map(|m| m.into_gravedad()))
    }

    /// Buscar nivel de gravedad por nombre, sin distinguir mayusculas
    pub async fn get_gravedad_by_nombre_impl(&self, nombre: &str) -> Result<Option<TipoGravedad>> {
        let result = Gravedades::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::NombreGravedad))).eq(nombre.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo buscar gravedad: {e}"))
            })?;

        Ok(result.map(|m| m.into_gravedad()))
    }

    /// Total de niveles de gravedad
    pub async fn count_gravedades_impl(&self) -> Result<i64> {
        let count = Gravedades::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar gravedades: {e}"))
        })?;

        Ok(count as i64)
    }

    /// Alta de un nivel de gravedad (semilla inicial)
    pub async fn create_gravedad_impl(
        &self,
        nombre: &str,
        descripcion: &str,
        puntos: i32,
    ) -> Result<TipoGravedad> {
        let model = ActiveModel {
            nombre_gravedad: Set(nombre.to_string()),
            descripcion: Set(Some(descripcion.to_string())),
            puntos: Set(Some(puntos)),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo crear gravedad: {e}"))
        })?;

        Ok(result.into_gravedad())
    }
}
