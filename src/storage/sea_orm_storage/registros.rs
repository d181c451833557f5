use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Datelike;

use super::SeaOrmStorage;
use crate::entity::conductas::{Column as ConductaColumn, Entity as Conductas, Relation as ConductaRelation};
use crate::entity::docentes::{Column as DocenteColumn, Entity as Docentes};
use crate::entity::estudiantes::{Column as EstudianteColumn, Entity as Estudiantes};
use crate::entity::registros_conducta::{
    ActiveModel, Column, Entity as Registros, Model as RegistroModel, Relation,
};
use crate::entity::tipos_gravedad::Column as GravedadColumn;
use crate::errors::{ControlEduError, Result};
use crate::models::{
    PaginationInfo,
    registros::{
        entities::{EstadoRegistro, RegistroConducta},
        requests::{CreateRegistroRequest, RegistroListQuery, UpdateRegistroRequest},
        responses::{RegistroConductaDTO, RegistroListResponse},
    },
    reportes::responses::{ConteoPorGrado, ConteoPorGravedad, ConteoPorMes},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// Resuelve estudiante, docente y conducta de cada fila y arma los
    /// modelos de negocio
    pub(crate) async fn armar_registros(
        &self,
        models: Vec<RegistroModel>,
    ) -> Result<Vec<RegistroConducta>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let estudiante_ids: HashSet<i64> = models.iter().map(|m| m.id_estudiante).collect();
        let docente_ids: HashSet<i64> = models.iter().map(|m| m.id_docente).collect();
        let conducta_ids: HashSet<i64> = models.iter().map(|m| m.id_conducta).collect();

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

        let conducta_models = Conductas::find()
            .filter(ConductaColumn::IdConducta.is_in(conducta_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo cargar conductas: {e}"))
            })?;
        let conductas: HashMap<i64, _> = self
            .armar_conductas(conducta_models)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        models
            .into_iter()
            .map(|m| {
                let estudiante = estudiantes.get(&m.id_estudiante).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Registro {} referencia un estudiante inexistente",
                        m.id_registro
                    ))
                })?;
                let docente = docentes.get(&m.id_docente).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Registro {} referencia un docente inexistente",
                        m.id_registro
                    ))
                })?;
                let conducta = conductas.get(&m.id_conducta).cloned().ok_or_else(|| {
                    ControlEduError::database_operation(format!(
                        "Registro {} referencia una conducta inexistente",
                        m.id_registro
                    ))
                })?;
                Ok(m.into_registro(estudiante, docente, conducta))
            })
            .collect()
    }

    async fn armar_registro(&self, model: RegistroModel) -> Result<RegistroConducta> {
        let mut registros = self.armar_registros(vec![model]).await?;
        registros.pop().ok_or_else(|| {
            ControlEduError::database_operation("Fallo armar el registro".to_string())
        })
    }

    /// Registrar un incidente. Los tres IDs deben resolverse; si alguno no
    /// existe no se persiste nada. Valores por defecto: estado ACTIVO, no
    /// leido, fecha de hoy.
    pub async fn create_registro_impl(
        &self,
        req: CreateRegistroRequest,
    ) -> Result<RegistroConducta> {
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
        let conducta = self
            .get_conducta_by_id_impl(req.conducta_id)
            .await?
            .ok_or_else(|| {
                ControlEduError::relation_not_found("Conducta no encontrada".to_string())
            })?;

        let hoy = chrono::Local::now().date_naive();

        let model = ActiveModel {
            id_estudiante: Set(estudiante.id),
            id_docente: Set(docente.id),
            id_conducta: Set(conducta.id),
            fecha_registro: Set(hoy),
            acciones_tomadas: Set(req.acciones_tomadas),
            comentarios: Set(req.comentarios),
            evidencia_url: Set(req.evidencia_url),
            leido: Set(false),
            fecha_lectura: Set(None),
            estado: Set(EstadoRegistro::Activo.to_string()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo crear registro: {e}"))
        })?;

        Ok(result.into_registro(estudiante, docente, conducta))
    }

    /// Buscar registro por ID
    pub async fn get_registro_by_id_impl(&self, id: i64) -> Result<Option<RegistroConducta>> {
        let result = Registros::find_by_id(id).one(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo buscar registro: {e}"))
        })?;

        match result {
            Some(model) => Ok(Some(self.armar_registro(model).await?)),
            None => Ok(None),
        }
    }

    /// Listar registros con filtros y paginacion
    pub async fn list_registros_impl(
        &self,
        query: RegistroListQuery,
    ) -> Result<RegistroListResponse> {
        let pagination = query.pagination();
        let page = pagination.page.max(1) as u64;
        let size = pagination.size.clamp(1, 100) as u64;

        let mut select = Registros::find();

        if let Some(estudiante_id) = query.estudiante_id {
            select = select.filter(Column::IdEstudiante.eq(estudiante_id));
        }

        if let Some(docente_id) = query.docente_id {
            select = select.filter(Column::IdDocente.eq(docente_id));
        }

        if let Some(conducta_id) = query.conducta_id {
            select = select.filter(Column::IdConducta.eq(conducta_id));
        }

        if let Some(fecha) = query.fecha {
            select = select.filter(Column::FechaRegistro.eq(fecha));
        }

        if let Some(inicio) = query.fecha_inicio {
            select = select.filter(Column::FechaRegistro.gte(inicio));
        }

        if let Some(fin) = query.fecha_fin {
            select = select.filter(Column::FechaRegistro.lte(fin));
        }

        if let Some(leido) = query.leido {
            select = select.filter(Column::Leido.eq(leido));
        }

        if let Some(estado) = query.estado {
            select = select.filter(Column::Estado.eq(estado.to_string()));
        }

        select = select
            .order_by_desc(Column::FechaRegistro)
            .order_by_desc(Column::IdRegistro);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo paginar registros: {e}"))
        })?;
        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo listar registros: {e}"))
        })?;

        let registros = self.armar_registros(models).await?;

        Ok(RegistroListResponse {
            items: registros
                .iter()
                .map(RegistroConductaDTO::from_registro)
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Registros de un estudiante, mas recientes primero
    pub async fn registros_por_estudiante_impl(
        &self,
        estudiante_id: i64,
    ) -> Result<Vec<RegistroConducta>> {
        let models = Registros::find()
            .filter(Column::IdEstudiante.eq(estudiante_id))
            .order_by_desc(Column::FechaRegistro)
            .order_by_desc(Column::IdRegistro)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar registros: {e}"))
            })?;

        self.armar_registros(models).await
    }

    /// Registros de un docente, mas recientes primero
    pub async fn registros_por_docente_impl(&self, docente_id: i64) -> Result<Vec<RegistroConducta>> {
        let models = Registros::find()
            .filter(Column::IdDocente.eq(docente_id))
            .order_by_desc(Column::FechaRegistro)
            .order_by_desc(Column::IdRegistro)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar registros: {e}"))
            })?;

        self.armar_registros(models).await
    }

    /// Registros de una fecha exacta
    pub async fn registros_por_fecha_impl(
        &self,
        fecha: chrono::NaiveDate,
    ) -> Result<Vec<RegistroConducta>> {
        let models = Registros::find()
            .filter(Column::FechaRegistro.eq(fecha))
            .order_by_desc(Column::IdRegistro)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar registros: {e}"))
            })?;

        self.armar_registros(models).await
    }

    /// Registros dentro de un rango de fechas inclusivo
    pub async fn registros_por_rango_impl(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<RegistroConducta>> {
        let models = Registros::find()
            .filter(Column::FechaRegistro.between(inicio, fin))
            .order_by_desc(Column::FechaRegistro)
            .order_by_desc(Column::IdRegistro)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar registros: {e}"))
            })?;

        self.armar_registros(models).await
    }

    /// Actualizar campos editables de un registro
    pub async fn update_registro_impl(
        &self,
        id: i64,
        update: UpdateRegistroRequest,
    ) -> Result<Option<RegistroConducta>> {
        let existing = self.get_registro_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id_registro: Set(id),
            ..Default::default()
        };

        if let Some(acciones) = update.acciones_tomadas {
            model.acciones_tomadas = Set(Some(acciones));
        }

        if let Some(comentarios) = update.comentarios {
            model.comentarios = Set(Some(comentarios));
        }

        if let Some(evidencia_url) = update.evidencia_url {
            model.evidencia_url = Set(Some(evidencia_url));
        }

        if let Some(estado) = update.estado {
            model.estado = Set(estado.to_string());
        }

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo actualizar registro: {e}"))
        })?;

        self.get_registro_by_id_impl(id).await
    }

    /// Marca el registro como leido y estampa la fecha de lectura. Repetir
    /// la llamada mantiene leido=true y refresca la fecha.
    pub async fn marcar_registro_leido_impl(&self, id: i64) -> Result<Option<RegistroConducta>> {
        let existing = self.get_registro_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let hoy = chrono::Local::now().date_naive();

        let model = ActiveModel {
            id_registro: Set(id),
            leido: Set(true),
            fecha_lectura: Set(Some(hoy)),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo marcar como leido: {e}"))
        })?;

        self.get_registro_by_id_impl(id).await
    }

    /// Cambia unicamente el campo estado
    pub async fn cambiar_estado_registro_impl(
        &self,
        id: i64,
        estado: EstadoRegistro,
    ) -> Result<Option<RegistroConducta>> {
        let existing = self.get_registro_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id_registro: Set(id),
            estado: Set(estado.to_string()),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo cambiar estado: {e}"))
        })?;

        self.get_registro_by_id_impl(id).await
    }

    /// Eliminar registro
    pub async fn delete_registro_impl(&self, id: i64) -> Result<bool> {
        let result = Registros::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo eliminar registro: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// Total de registros
    pub async fn count_registros_impl(&self) -> Result<i64> {
        let count = Registros::find().count(&self.db).await.map_err(|e| {
            ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
        })?;

        Ok(count as i64)
    }

    pub async fn count_registros_by_estado_impl(&self, estado: EstadoRegistro) -> Result<i64> {
        let count = Registros::find()
            .filter(Column::Estado.eq(estado.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        Ok(count as i64)
    }

    pub async fn count_registros_by_leido_impl(&self, leido: bool) -> Result<i64> {
        let count = Registros::find()
            .filter(Column::Leido.eq(leido))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        Ok(count as i64)
    }

    pub async fn count_registros_by_estudiante_impl(&self, estudiante_id: i64) -> Result<i64> {
        let count = Registros::find()
            .filter(Column::IdEstudiante.eq(estudiante_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        Ok(count as i64)
    }

    pub async fn count_registros_by_docente_impl(&self, docente_id: i64) -> Result<i64> {
        let count = Registros::find()
            .filter(Column::IdDocente.eq(docente_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo contar registros: {e}"))
            })?;

        Ok(count as i64)
    }

    /// Ultimos registros por fecha
    pub async fn registros_recientes_impl(&self, limit: u64) -> Result<Vec<RegistroConducta>> {
        let models = Registros::find()
            .order_by_desc(Column::FechaRegistro)
            .order_by_desc(Column::IdRegistro)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo listar recientes: {e}"))
            })?;

        self.armar_registros(models).await
    }

    /// Conteo de registros agrupado por nivel de gravedad
    pub async fn count_registros_por_gravedad_impl(&self) -> Result<Vec<ConteoPorGravedad>> {
        let filas: Vec<(String, i64)> = Registros::find()
            .join(JoinType::InnerJoin, Relation::Conducta.def())
            .join(JoinType::InnerJoin, ConductaRelation::Gravedad.def())
            .select_only()
            .column(GravedadColumn::NombreGravedad)
            .column_as(Column::IdRegistro.count(), "total")
            .group_by(GravedadColumn::NombreGravedad)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo agrupar por gravedad: {e}"))
            })?;

        Ok(filas
            .into_iter()
            .map(|(gravedad, total)| ConteoPorGravedad { gravedad, total })
            .collect())
    }

    /// Conteo de registros agrupado por grado del estudiante
    pub async fn count_registros_por_grado_impl(&self) -> Result<Vec<ConteoPorGrado>> {
        let filas: Vec<(String, i64)> = Registros::find()
            .join(JoinType::InnerJoin, Relation::Estudiante.def())
            .select_only()
            .column(EstudianteColumn::Grado)
            .column_as(Column::IdRegistro.count(), "total")
            .group_by(EstudianteColumn::Grado)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo agrupar por grado: {e}"))
            })?;

        Ok(filas
            .into_iter()
            .map(|(grado, total)| ConteoPorGrado { grado, total })
            .collect())
    }

    /// Conteo de registros agrupado por mes calendario. Las fechas se
    /// agrupan aqui porque la extraccion de anio/mes no es portable entre
    /// los motores soportados.
    pub async fn count_registros_por_mes_impl(&self) -> Result<Vec<ConteoPorMes>> {
        let fechas: Vec<chrono::NaiveDate> = Registros::find()
            .select_only()
            .column(Column::FechaRegistro)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ControlEduError::database_operation(format!("Fallo agrupar por mes: {e}"))
            })?;

        let mut conteos: BTreeMap<(i32, u32), i64> = BTreeMap::new();
        for fecha in fechas {
            *conteos.entry((fecha.year(), fecha.month())).or_insert(0) += 1;
        }

        Ok(conteos
            .into_iter()
            .map(|((anio, mes), total)| ConteoPorMes { anio, mes, total })
            .collect())
    }
}
