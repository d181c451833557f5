use super::SeaOrmStorage;
use crate::entity::estudiantes::{ActiveModel, Column, Entity as Estudiantes};
use crate::entity::observaciones::{Column as ObservacionColumn, Entity as Observaciones};
use crate::entity::registros_conducta::{Column as RegistroColumn, Entity as Registros};
use crate::errors::{ControlEduError, Result};
use crate::models::{
    PaginationInfo,
    estudiantes::{
        entities::Estudiante,
        requests::{CreateEstudianteRequest, EstudianteListQuery, UpdateEstudianteRequest},
        responses::EstudianteListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// Crear estudiante
    pub async fn create_estudiante_impl(&self, req: CreateEstudianteRequest) -> Result<Estudiante> {
        let model = ActiveModel {
            nombres: Set(req.nombres),
            apellidos: Set(req.apellidos),
            grado: Set(req.grado),
            seccion: Set(req.seccion),
            fecha_nacimiento: Set(req.fecha_nacimiento),
            usuario: Set(req.usuario),
            password: Set(req.password),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo crear estudiante: {e}"))
        })?;

        Ok(result.into_estudiante())
    }

    /// Buscar estudiante por ID
    pub async fn get_estudiante_by_id_impl(&self, id: i64) -> Result<Option<Estudiante>> {
        let result = Estudiantes::find_by_id(id).one(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo buscar estudiante: {e}"))
        })?;

        Ok(result.map(|m| m.into_estudiante()))
    }

    /// Buscar estudiante por usuario
    pub async fn get_estudiante_by_usuario_impl(&self, usuario: &str) -> Result<Option<Estudiante>> {
        let result = Estudiantes::find()
            .filter(Column::Usuario.eq(usuario))
            .one(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo buscar estudiante: {e}"))
            })?;

        Ok(result.map(|m| m.into_estudiante()))
    }

    /// Listar estudiantes con paginacion y filtros de grado/seccion
    pub async fn list_estudiantes_impl(
        &self,
        query: EstudianteListQuery,
    ) -> Result<EstudianteListResponse> {
        let pagination = query.pagination();
        let page = pagination.page.max(1) as u64;
        let size = pagination.size.clamp(1, 100) as u64;

        let mut select = Estudiantes::find();

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

        if let Some(ref grado) = query.grado {
            select = select.filter(Column::Grado.eq(grado));
        }

        if let Some(ref seccion) = query.seccion {
            select = select.filter(Column::Seccion.eq(seccion));
        }

        select = select
            .order_by_asc(Column::Apellidos)
            .order_by_asc(Column::Nombres);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar estudiantes: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo paginar estudiantes: {e}"))
        })?;
        let estudiantes = paginator.fetch_page(page - 1).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo listar estudiantes: {e}"))
        })?;

        Ok(EstudianteListResponse {
            items: estudiantes.into_iter().map(|m| m.into_estudiante()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Actualizar estudiante
    pub async fn update_estudiante_impl(
        &self,
        id: i64,
        update: UpdateEstudianteRequest,
    ) -> Result<Option<Estudiante>> {
        let existing = self.get_estudiante_by_id_impl(id).await?;
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

        if let Some(grado) = update.grado {
            model.grado = Set(grado);
        }

        if let Some(seccion) = update.seccion {
            model.seccion = Set(seccion);
        }

        if let Some(fecha_nacimiento) = update.fecha_nacimiento {
            model.fecha_nacimiento = Set(Some(fecha_nacimiento));
        }

        if let Some(password) = update.password {
            model.password = Set(password);
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar estudiante: {e}"))
        })?;

        self.get_estudiante_by_id_impl(id).await
    }

    /// Eliminar estudiante
    pub async fn delete_estudiante_impl(&self, id: i64) -> Result<bool> {
        let result = Estudiantes::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo eliminar estudiante: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// Total de estudiantes
    pub async fn count_estudiantes_impl(&self) -> Result<i64> {
        let count = Estudiantes::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar estudiantes: {e}"))
        })?;

        Ok(count as i64)
    }

    /// Grados distintos, ordenados
    pub async fn grados_distinct_impl(&self) -> Result<Vec<String>> {
        let grados: Vec<String> = Estudiantes::find()
            .select_only()
            .column(Column::Grado)
            .distinct()
            .order_by_asc(Column::Grado)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo listar grados: {e}")))?;

        Ok(grados)
    }

    /// Secciones distintas, ordenadas
    pub async fn secciones_distinct_impl(&self) -> Result<Vec<String>> {
        let secciones: Vec<String> = Estudiantes::find()
            .select_only()
            .column(Column::Seccion)
            .distinct()
            .order_by_asc(Column::Seccion)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar secciones: {e}"))
            })?;

        Ok(secciones)
    }

    /// Registros u observaciones que referencian al estudiante
    pub async fn estudiante_tiene_referencias_impl(&self, id: i64) -> Result<bool> {
        let registros = Registros::find()
            .filter(RegistroColumn::IdEstudiante.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        if registros > 0 {
            return Ok(true);
        }

        let observaciones = Observaciones::find()
            .filter(ObservacionColumn::IdEstudiante.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
            })?;

        Ok(observaciones > 0)
    }
}
