use super::SeaOrmStorage;
use crate::entity::directores::{ActiveModel, Column, Entity as Directores};
use crate::errors::{ControlEduError, Result};
use crate::models::directores::{
    entities::Director,
    requests::{CreateDirectorRequest, UpdateDirectorRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// Crear director
    pub async fn create_director_impl(&self, req: CreateDirectorRequest) -> Result<Director> {
        let model = ActiveModel {
            nombres: Set(req.nombres),
            apellidos: Set(req.apellidos),
            usuario: Set(req.usuario),
            password: Set(req.password),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo crear director: {e}")))?;

        Ok(result.into_director())
    }

    /// Buscar director por ID
    pub async fn get_director_by_id_impl(&self, id: i64) -> Result<Option<Director>> {
        let result = Directores::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo buscar director: {e}")))?;

        Ok(result.map(|m| m.into_director()))
    }

    /// Buscar director por usuario
    pub async fn get_director_by_usuario_impl(&self, usuario: &str) -> Result<Option<Director>> {
        let result = Directores::find()
            .filter(Column::Usuario.eq(usuario))
            .one(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo buscar director: {e}")))?;

        Ok(result.map(|m| m.into_director()))
    }

    /// Actualizar director
    pub async fn update_director_impl(
        &self,
        id: i64,
        update: UpdateDirectorRequest,
    ) -> Result<Option<Director>> {
        let existing = self.get_director_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(nombres) = update.nombres {
            model.nombres = Set(nombres);
        }

        if let Some(apellidos) = update.apellidos {
            model.apellidos = Set(apellidos);
        }

        if let Some(password) = update.password {
            model.password = Set(password);
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar director: {e}"))
        })?;

        self.get_director_by_id_impl(id).await
    }

    /// Total de directores
    pub async fn count_directores_impl(&self) -> Result<i64> {
        let count = Directores::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar directores: {e}"))
        })?;

        Ok(count as i64)
    }
}
