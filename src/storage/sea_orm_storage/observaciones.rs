use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::docentes::{Column as DocenteColumn, Entity as Docentes};
use crate::entity::estudiantes::{Column as EstudianteColumn, Entity as Estudiantes};
use crate::entity::observaciones::{
    ActiveModel, Column, Entity as Observaciones, Model as ObservacionModel,
};
use crate::errors::{ControlEduError, Result};
use crate::models::{
    PaginationInfo,
    observaciones::{
        entities::Observacion,
        requests::{CreateObservacionRequest, ObservacionListQuery, UpdateObservacionRequest},
        responses::{ObservacionDTO, ObservacionListResponse},
    },
    reportes::responses::ConteoPorTipo,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// Resuelve estudiante y docente de cada fila y arma los modelos de
    /// negocio
    pub(crate) async fn armar_observaciones(
        &self,
        models: Vec<ObservacionModel>,
    ) -> Result<Vec<Observacion>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let estudiante_ids: HashSet<i64> = models.iter().map(|m| m.id_estudiante).collect();
        let docente_ids: HashSet<i64> = models.iter().map(|m| m.id_docente).collect();

        let estudiantes: HashMap<i64, _> = Estudiantes::find()
            .filter(EstudianteColumn::Id.is_in(estudiante_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo cargar estudiantes: {e}"))
            })?
            .into_iter()
            .map(|m| (m.id, m.into_estudiante()))
            .collect();

        let docentes: HashMap<i64, _> = Docentes::find()
            .filter(DocenteColumn::Id.is_in(docente_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo cargar docentes: {e}"))
            })?
            .into_iter()
            .map(|m| (m.id, m.into_docente()))
            .collect();

        models
            .into_iter()
            .map(|m| {
                let estudiante = estudiantes.get(&m.id_estudiante).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Observacion {} referencia un estudiante inexistente",
                        m.id_observacion
                    ))
                })?;
                let docente = docentes.get(&m.id_docente).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Observacion {} referencia un docente inexistente",
                        m.id_observacion
                    ))
                })?;
                Ok(m.into_observacion(estudiante, docente))
            })
            .collect()
    }

    async fn armar_observacion(&self, model: ObservacionModel) -> Result<Observacion> {
        let mut observaciones = self.armar_observaciones(vec![model]).await?;
        observaciones.pop().ok_or_else(|| {
            ControlEduError::database_operation("Fallo armar la observacion".to_string())
        })
    }

    /// Registrar una observacion. Estudiante y docente deben resolverse o
    /// no se persiste nada. Valores por defecto: fecha de hoy, no leida.
    pub async fn create_observacion_impl(
        &self,
        req: CreateObservacionRequest,
    ) -> Result<Observacion> {
        let estudiante = self
            .get_estudiante_by_id_impl(req.estudiante_id)
            .await?
            .ok_or_else(|| {
                ControlEduError::relation_not_found("Estudiante no encontrado".to_string())
            })?;
        let docente = self
            .get_docente_by_id_impl(req.docente_id)
            .await?
            .ok_or_else(|| {
                ControlEduError::relation_not_found("Docente no encontrado".to_string())
            })?;

        let hoy = chrono::Local::now().date_naive();

        let model = ActiveModel {
            id_estudiante: Set(estudiante.id),
            id_docente: Set(docente.id),
            tipo_observacion: Set(req.tipo_observacion),
            descripcion: Set(req.descripcion),
            fecha: Set(hoy),
            leido: Set(false),
            fecha_lectura: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo crear observacion: {e}"))
        })?;

        Ok(result.into_observacion(estudiante, docente))
    }

    /// Buscar observacion por ID
    pub async fn get_observacion_by_id_impl(&self, id: i64) -> Result<Option<Observacion>> {
        let result = Observaciones::find_by_id(id).one(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo buscar observacion: {e}"))
        })?;

        match result {
            Some(model) => Ok(Some(self.armar_observacion(model).await?)),
            None => Ok(None),
        }
    }

    /// Listar observaciones con filtros y paginacion
    pub async fn list_observaciones_impl(
        &self,
        query: ObservacionListQuery,
    ) -> Result<ObservacionListResponse> {
        let pagination = query.pagination();
        let page = pagination.page.max(1) as u64;
        let size = pagination.size.clamp(1, 100) as u64;

        let mut select = Observaciones::find();

        if let Some(estudiante_id) = query.estudiante_id {
            select = select.filter(Column::IdEstudiante.eq(estudiante_id));
        }

        if let Some(docente_id) = query.docente_id {
            select = select.filter(Column::IdDocente.eq(docente_id));
        }

        if let Some(ref tipo) = query.tipo {
            select = select.filter(Column::TipoObservacion.eq(tipo));
        }

        if let Some(fecha) = query.fecha {
            select = select.filter(Column::Fecha.eq(fecha));
        }

        if let Some(inicio) = query.fecha_inicio {
            select = select.filter(Column::Fecha.gte(inicio));
        }

        if let Some(fin) = query.fecha_fin {
            select = select.filter(Column::Fecha.lte(fin));
        }

        if let Some(leido) = query.leido {
            select = select.filter(Column::Leido.eq(leido));
        }

        select = select
            .order_by_desc(Column::Fecha)
            .order_by_desc(Column::IdObservacion);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo paginar observaciones: {e}"))
        })?;
        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo listar observaciones: {e}"))
        })?;

        let observaciones = self.armar_observaciones(models).await?;

        Ok(ObservacionListResponse {
            items: observaciones
                .iter()
                .map(ObservacionDTO::from_observacion)
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Observaciones de un estudiante, mas recientes primero
    pub async fn observaciones_por_estudiante_impl(
        &self,
        estudiante_id: i64,
    ) -> Result<Vec<Observacion>> {
        let models = Observaciones::find()
            .filter(Column::IdEstudiante.eq(estudiante_id))
            .order_by_desc(Column::Fecha)
            .order_by_desc(Column::IdObservacion)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar observaciones: {e}"))
            })?;

        self.armar_observaciones(models).await
    }

    /// Observaciones de un docente, mas recientes primero
    pub async fn observaciones_por_docente_impl(&self, docente_id: i64) -> Result<Vec<Observacion>> {
        let models = Observaciones::find()
            .filter(Column::IdDocente.eq(docente_id))
            .order_by_desc(Column::Fecha)
            .order_by_desc(Column::IdObservacion)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar observaciones: {e}"))
            })?;

        self.armar_observaciones(models).await
    }

    /// Observaciones de una fecha exacta
    pub async fn observaciones_por_fecha_impl(
        &self,
        fecha: chrono::NaiveDate,
    ) -> Result<Vec<Observacion>> {
        let models = Observaciones::find()
            .filter(Column::Fecha.eq(fecha))
            .order_by_desc(Column::IdObservacion)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar observaciones: {e}"))
            })?;

        self.armar_observaciones(models).await
    }

    /// Observaciones dentro de un rango de fechas inclusivo
    pub async fn observaciones_por_rango_impl(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<Observacion>> {
        let models = Observaciones::find()
            .filter(Column::Fecha.between(inicio, fin))
            .order_by_desc(Column::Fecha)
            .order_by_desc(Column::IdObservacion)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar observaciones: {e}"))
            })?;

        self.armar_observaciones(models).await
    }

    /// Actualizar campos editables de una observacion
    pub async fn update_observacion_impl(
        &self,
        id: i64,
        update: UpdateObservacionRequest,
    ) -> Result<Option<Observacion>> {
        let existing = self.get_observacion_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id_observacion: Set(id),
            ..Default::default()
        };

        if let Some(tipo) = update.tipo_observacion {
            model.tipo_observacion = Set(tipo);
        }

        if let Some(descripcion) = update.descripcion {
            model.descripcion = Set(descripcion);
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar observacion: {e}"))
        })?;

        self.get_observacion_by_id_impl(id).await
    }

    /// Marca la observacion como leida y estampa la fecha de lectura
    pub async fn marcar_observacion_leida_impl(&self, id: i64) -> Result<Option<Observacion>> {
        let existing = self.get_observacion_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let hoy = chrono::Local::now().date_naive();

        let model = ActiveModel {
            id_observacion: Set(id),
            leido: Set(true),
            fecha_lectura: Set(Some(hoy)),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo marcar como leida: {e}"))
        })?;

        self.get_observacion_by_id_impl(id).await
    }

    /// Eliminar observacion
    pub async fn delete_observacion_impl(&self, id: i64) -> Result<bool> {
        let result = Observaciones::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo eliminar observacion: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// Total de observaciones
    pub async fn count_observaciones_impl(&self) -> Result<i64> {
        let count = Observaciones::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
        })?;

        Ok(count as i64)
    }

    pub async fn count_observaciones_by_estudiante_impl(&self, estudiante_id: i64) -> Result<i64> {
        let count = Observaciones::find()
            .filter(Column::IdEstudiante.eq(estudiante_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
            })?;

        Ok(count as i64)
    }

    pub async fn count_observaciones_by_docente_impl(&self, docente_id: i64) -> Result<i64> {
        let count = Observaciones::find()
            .filter(Column::IdDocente.eq(docente_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar observaciones: {e}"))
            })?;

        Ok(count as i64)
    }

    /// Ultimas observaciones por fecha
    pub async fn observaciones_recientes_impl(&self, limit: u64) -> Result<Vec<Observacion>> {
        let models = Observaciones::find()
            .order_by_desc(Column::Fecha)
            .order_by_desc(Column::IdObservacion)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar recientes: {e}"))
            })?;

        self.armar_observaciones(models).await
    }

    /// Conteo de observaciones agrupado por el texto del tipo
    pub async fn count_observaciones_por_tipo_impl(&self) -> Result<Vec<ConteoPorTipo>> {
        let filas: Vec<(String, i64)> = Observaciones::find()
            .select_only()
            .column(Column::TipoObservacion)
            .column_as(Column::IdObservacion.count(), "total")
            .group_by(Column::TipoObservacion)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo agrupar por tipo: {e}"))
            })?;

        Ok(filas
            .into_iter()
            .map(|(tipo, total)| ConteoPorTipo { tipo, total })
            .collect())
    }
}
