use super::SeaOrmStorage;
use crate::entity::docentes::{ActiveModel, Column, Entity as Docentes};
use crate::entity::observaciones::{Column as ObservacionColumn, Entity as Observaciones};
use crate::entity::registros_conducta::{Column as RegistroColumn, Entity as Registros};
use crate::errors::{ControlEduError, Result};
use crate::models::{
    PaginationInfo,
    docentes::{
        entities::Docente,
        requests::{CreateDocenteRequest, DocenteListQuery, UpdateDocenteRequest},
        responses::DocenteListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Crear docente
    pub async fn create_docente_impl(&self, req: CreateDocenteRequest) -> Result<Docente> {
        let model = ActiveModel {
            nombres: Set(req.nombres),
            apellidos: Set(req.apellidos),
            materia: Set(req.materia),
            usuario: Set(req.usuario),
            password: Set(req.password),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo crear docente: {e}")))?;

        Ok(result.into_docente())
    }

    /// Buscar docente por ID
    pub async fn get_docente_by_id_impl(&self, id: i64) -> Result<Option<Docente>> {
        let result = Docentes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo buscar docente: {e}")))?;

        Ok(result.map(|m| m.into_docente()))
    }

    /// Buscar docente por usuario
    pub async fn get_docente_by_usuario_impl(&self, usuario: &str) -> Result<Option<Docente>> {
        let result = Docentes::find()
            .filter(Column::Usuario.eq(usuario))
            .one(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo buscar docente: {e}")))?;

        Ok(result.map(|m| m.into_docente()))
    }

    /// Listar docentes con paginacion
    pub async fn list_docentes_impl(&self, query: DocenteListQuery) -> Result<DocenteListResponse> {
        let pagination = query.pagination();
        let page = pagination.page.max(1) as u64;
        let size = pagination.size.clamp(1, 100) as u64;

        let mut select = Docentes::find();

        // Busqueda por nombres, apellidos o usuario
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Nombres.contains(&escaped))
                    .add(Column::Apellidos.contains(&escaped))
                    .add(Column::Usuario.contains(&escaped)),
            );
        }

        // Filtro por materia
        if let Some(ref materia) = query.materia {
            select = select.filter(Column::Materia.eq(materia));
        }

        select = select.order_by_asc(Column::Apellidos).order_by_asc(Column::Nombres);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar docentes: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo paginar docentes: {e}"))
        })?;
        let docentes = paginator.fetch_page(page - 1).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo listar docentes: {e}"))
        })?;

        Ok(DocenteListResponse {
            items: docentes.into_iter().map(|m| m.into_docente()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Actualizar docente
    pub async fn update_docente_impl(
        &self,
        id: i64,
        update: UpdateDocenteRequest,
    ) -> Result<Option<Docente>> {
        let existing = self.get_docente_by_id_impl(id).await?;
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

        if let Some(materia) = update.materia {
            model.materia = Set(Some(materia));
        }

        if let Some(password) = update.password {
            model.password = Set(password);
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar docente: {e}"))
        })?;

        self.get_docente_by_id_impl(id).await
    }

    /// Eliminar docente
    pub async fn delete_docente_impl(&self, id: i64) -> Result<bool> {
        let result = Docentes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo eliminar docente: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Total de docentes
    pub async fn count_docentes_impl(&self) -> Result<i64> {
        let count = Docentes::find()
            .count(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo contar docentes: {e}")))?;

        Ok(count as i64)
    }

    /// Registros u observaciones que referencian al docente
    pub async fn docente_tiene_referencias_impl(&self, id: i64) -> Result<bool> {
        let registros = Registros::find()
            .filter(RegistroColumn::IdDocente.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        if registros > 0 {
            return Ok(true);
        }

        let observaciones = Observaciones::find()
            .filter(ObservacionColumn::IdDocente.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
            })?;

        Ok(observaciones > 0)
    }
}
