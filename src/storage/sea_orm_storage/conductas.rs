use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::conductas::{
    ActiveModel, Column, Entity as Conductas, Model as ConductaModel, Relation,
};
use crate::entity::registros_conducta::{Column as RegistroColumn, Entity as Registros};
use crate::errors::{ControlEduError, Result};
use crate::models::conductas::{
    entities::Conducta,
    requests::{ConductaListQuery, CreateConductaRequest, UpdateConductaRequest},
    responses::ConductaUsoDTO,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// Resuelve las gravedades referenciadas y arma los modelos de negocio
    pub(crate) async fn armar_conductas(
        &self,
        models: Vec<ConductaModel>,
    ) -> Result<Vec<Conducta>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: HashSet<i64> = models.iter().map(|m| m.id_gravedad).collect();
        let gravedades = {
            use crate::entity::tipos_gravedad::{Column as GravedadColumn, Entity as Gravedades};
            Gravedades::find()
                .filter(GravedadColumn::IdGravedad.is_in(ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    ControlEduError::database_operation(format!("Fallo cargar gravedades: {e}"))
                })?
        };

        let mapa: HashMap<i64, _> = gravedades
            .into_iter()
            .map(|g| (g.id_gravedad, g.into_gravedad()))
            .collect();

        models
            .into_iter()
            .map(|m| {
                let gravedad = mapa.get(&m.id_gravedad).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Conducta {} referencia una gravedad inexistente",
                        m.id_conducta
                    ))
                })?;
                Ok(m.into_conducta(gravedad))
            })
            .collect()
    }

    async fn armar_conducta(&self, model: ConductaModel) -> Result<Conducta> {
        let mut conductas = self.armar_conductas(vec![model]).await?;
        conductas.pop().ok_or_else(|| {
            ControlEduError::database_operation("Fallo armar la conducta".to_string())
        })
    }

    /// Crear conducta resolviendo su nivel de gravedad
    pub async fn create_conducta_impl(&self, req: CreateConductaRequest) -> Result<Conducta> {
        let gravedad = self
            .get_gravedad_by_id_impl(req.id_gravedad)
            .await?
            .ok_or_else(|| {
                ControlEduError::relation_not_found("Tipo de gravedad no encontrado".to_string())
            })?;

        let model = ActiveModel {
            nombre_conducta: Set(req.nombre_conducta),
            descripcion: Set(req.descripcion),
            id_gravedad: Set(gravedad.id),
            activo: Set(true),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo crear conducta: {e}"))
        })?;

        Ok(result.into_conducta(gravedad))
    }

    /// Buscar conducta por ID
    pub async fn get_conducta_by_id_impl(&self, id: i64) -> Result<Option<Conducta>> {
        let result = Conductas::find_by_id(id).one(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo buscar conducta: {e}"))
        })?;

        match result {
            Some(model) => Ok(Some(self.armar_conducta(model).await?)),
            None => Ok(None),
        }
    }

    /// Listar el catalogo con filtros opcionales
    pub async fn list_conductas_impl(&self, query: ConductaListQuery) -> Result<Vec<Conducta>> {
        let mut select = Conductas::find();

        if let Some(activo) = query.activo {
            select = select.filter(Column::Activo.eq(activo));
        }

        if let Some(id_gravedad) = query.id_gravedad {
            select = select.filter(Column::IdGravedad.eq(id_gravedad));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::NombreConducta.contains(&escaped));
        }

        let models = select
            .order_by_asc(Column::NombreConducta)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar conductas: {e}"))
            })?;

        self.armar_conductas(models).await
    }

    /// Actualizar conducta; la nueva gravedad debe existir
    pub async fn update_conducta_impl(
        &self,
        id: i64,
        update: UpdateConductaRequest,
    ) -> Result<Option<Conducta>> {
        let existing = self.get_conducta_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        if let Some(id_gravedad) = update.id_gravedad
            && self.get_gravedad_by_id_impl(id_gravedad).await?.is_none()
        {
            return Err(ControlEduError::relation_not_found(
                "Tipo de gravedad no encontrado".to_string(),
            ));
        }

        let mut model = ActiveModel {
            id_conducta: Set(id),
            ..Default::default()
        };

        if let Some(nombre) = update.nombre_conducta {
            model.nombre_conducta = Set(nombre);
        }

        if let Some(descripcion) = update.descripcion {
            model.descripcion = Set(descripcion);
        }

        if let Some(id_gravedad) = update.id_gravedad {
            model.id_gravedad = Set(id_gravedad);
        }

        if let Some(activo) = update.activo {
            model.activo = Set(activo);
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar conducta: {e}"))
        })?;

        self.get_conducta_by_id_impl(id).await
    }

    /// Eliminar conducta. La politica de bloqueo por referencias se aplica
    /// en el servicio; la FK con RESTRICT protege ademas en la base.
    pub async fn delete_conducta_impl(&self, id: i64) -> Result<bool> {
        let result = Conductas::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo eliminar conducta: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// Activacion logica
    pub async fn set_conducta_activa_impl(&self, id: i64, activo: bool) -> Result<Option<Conducta>> {
        let existing = self.get_conducta_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id_conducta: Set(id),
            activo: Set(activo),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo cambiar activacion: {e}"))
        })?;

        self.get_conducta_by_id_impl(id).await
    }

    /// Total de conductas
    pub async fn count_conductas_impl(&self) -> Result<i64> {
        let count = Conductas::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar conductas: {e}"))
        })?;

        Ok(count as i64)
    }

    /// Registros asociados a una conducta
    pub async fn count_registros_by_conducta_impl(&self, conducta_id: i64) -> Result<i64> {
        let count = Registros::find()
            .filter(RegistroColumn::IdConducta.eq(conducta_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        Ok(count as i64)
    }

    /// Conductas activas con su numero de usos, descendente
    pub async fn conductas_mas_utilizadas_impl(&self) -> Result<Vec<ConductaUsoDTO>> {
        let conteos: Vec<(i64, i64)> = Conductas::find()
            .filter(Column::Activo.eq(true))
            .join(JoinType::LeftJoin, Relation::Registros.def())
            .select_only()
            .column(Column::IdConducta)
            .column_as(RegistroColumn::IdRegistro.count(), "total_usos")
            .group_by(Column::IdConducta)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar usos: {e}"))
            })?;

        let usos: HashMap<i64, i64> = conteos.into_iter().collect();

        let models = Conductas::find()
            .filter(Column::Activo.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar conductas: {e}"))
            })?;

        let conductas = self.armar_conductas(models).await?;

        let mut resultado: Vec<ConductaUsoDTO> = conductas
            .into_iter()
            .map(|conducta| {
                let total_usos = usos.get(&conducta.id).copied().unwrap_or(0);
                ConductaUsoDTO {
                    conducta,
                    total_usos,
                }
            })
            .collect();

        resultado.sort_by(|a, b| b.total_usos.cmp(&a.total_usos));
        Ok(resultado)
    }

    /// Conductas activas sin ningun registro asociado
    pub async fn conductas_no_utilizadas_impl(&self) -> Result<Vec<Conducta>> {
        let usadas: Vec<i64> = Registros::find()
            .select_only()
            .column(RegistroColumn::IdConducta)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar conductas usadas: {e}"))
            })?;

        let mut select = Conductas::find().filter(Column::Activo.eq(true));
        if !usadas.is_empty() {
            select = select.filter(Column::IdConducta.is_not_in(usadas));
        }

        let models = select
            .order_by_asc(Column::NombreConducta)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar conductas: {e}"))
            })?;

        self.armar_conductas(models).await
    }
}
