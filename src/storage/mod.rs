use std::sync::Arc;

use crate::models::{
    conductas::{
        entities::Conducta,
        requests::{ConductaListQuery, CreateConductaRequest, UpdateConductaRequest},
        responses::ConductaUsoDTO,
    },
    directores::{
        entities::Director,
        requests::{CreateDirectorRequest, UpdateDirectorRequest},
    },
    docentes::{
        entities::Docente,
        requests::{CreateDocenteRequest, DocenteListQuery, UpdateDocenteRequest},
        responses::DocenteListResponse,
    },
    estudiantes::{
        entities::Estudiante,
        requests::{CreateEstudianteRequest, EstudianteListQuery, UpdateEstudianteRequest},
        responses::EstudianteListResponse,
    },
    gravedades::entities::TipoGravedad,
    observaciones::{
        entities::Observacion,
        requests::{CreateObservacionRequest, ObservacionListQuery, UpdateObservacionRequest},
        responses::ObservacionListResponse,
    },
    registros::{
        entities::{EstadoRegistro, RegistroConducta},
        requests::{CreateRegistroRequest, RegistroListQuery, UpdateRegistroRequest},
        responses::RegistroListResponse,
    },
    reportes::responses::{ConteoPorGrado, ConteoPorGravedad, ConteoPorMes, ConteoPorTipo},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Directores
    // Crear director
    async fn create_director(&self, req: CreateDirectorRequest) -> Result<Director>;
    // Buscar director por ID
    async fn get_director_by_id(&self, id: i64) -> Result<Option<Director>>;
    // Buscar director por usuario
    async fn get_director_by_usuario(&self, usuario: &str) -> Result<Option<Director>>;
    // Actualizar director
    async fn update_director(&self, id: i64, update: UpdateDirectorRequest)
    -> Result<Option<Director>>;
    // Total de directores
    async fn count_directores(&self) -> Result<i64>;

    /// Docentes
    async fn create_docente(&self, req: CreateDocenteRequest) -> Result<Docente>;
    async fn get_docente_by_id(&self, id: i64) -> Result<Option<Docente>>;
    async fn get_docente_by_usuario(&self, usuario: &str) -> Result<Option<Docente>>;
    async fn list_docentes(&self, query: DocenteListQuery) -> Result<DocenteListResponse>;
    async fn update_docente(&self, id: i64, update: UpdateDocenteRequest)
    -> Result<Option<Docente>>;
    async fn delete_docente(&self, id: i64) -> Result<bool>;
    async fn count_docentes(&self) -> Result<i64>;
    // Registros u observaciones que referencian al docente
    async fn docente_tiene_referencias(&self, id: i64) -> Result<bool>;

    /// Estudiantes
    async fn create_estudiante(&self, req: CreateEstudianteRequest) -> Result<Estudiante>;
    async fn get_estudiante_by_id(&self, id: i64) -> Result<Option<Estudiante>>;
    async fn get_estudiante_by_usuario(&self, usuario: &str) -> Result<Option<Estudiante>>;
    async fn list_estudiantes(&self, query: EstudianteListQuery) -> Result<EstudianteListResponse>;
    async fn update_estudiante(
        &self,
        id: i64,
        update: UpdateEstudianteRequest,
    ) -> Result<Option<Estudiante>>;
    async fn delete_estudiante(&self, id: i64) -> Result<bool>;
    async fn count_estudiantes(&self) -> Result<i64>;
    // Catalogos para filtros
    async fn grados_distinct(&self) -> Result<Vec<String>>;
    async fn secciones_distinct(&self) -> Result<Vec<String>>;
    // Registros u observaciones que referencian al estudiante
    async fn estudiante_tiene_referencias(&self, id: i64) -> Result<bool>;

    /// Tipos de gravedad
    // Listado ordenado por nombre
    async fn list_gravedades(&self) -> Result<Vec<TipoGravedad>>;
    async fn get_gravedad_by_id(&self, id: i64) -> Result<Option<TipoGravedad>>;
    // Busqueda por nombre sin distinguir mayusculas
    async fn get_gravedad_by_nombre(&self, nombre: &str) -> Result<Option<TipoGravedad>>;
    async fn count_gravedades(&self) -> Result<i64>;
    // Alta directa, usada por la semilla inicial
    async fn create_gravedad(
        &self,
        nombre: &str,
        descripcion: &str,
        puntos: i32,
    ) -> Result<TipoGravedad>;

    /// Conductas (catalogo de reglas)
    // Crear conducta resolviendo su gravedad
    async fn create_conducta(&self, req: CreateConductaRequest) -> Result<Conducta>;
    async fn get_conducta_by_id(&self, id: i64) -> Result<Option<Conducta>>;
    async fn list_conductas(&self, query: ConductaListQuery) -> Result<Vec<Conducta>>;
    async fn update_conducta(
        &self,
        id: i64,
        update: UpdateConductaRequest,
    ) -> Result<Option<Conducta>>;
    async fn delete_conducta(&self, id: i64) -> Result<bool>;
    // Activacion logica sin borrar historial
    async fn set_conducta_activa(&self, id: i64, activo: bool) -> Result<Option<Conducta>>;
    async fn count_conductas(&self) -> Result<i64>;
    async fn count_registros_by_conducta(&self, conducta_id: i64) -> Result<i64>;
    // Curaduria del catalogo
    async fn conductas_mas_utilizadas(&self) -> Result<Vec<ConductaUsoDTO>>;
    async fn conductas_no_utilizadas(&self) -> Result<Vec<Conducta>>;

    /// Registros de conducta (incidentes)
    // Registrar incidente resolviendo estudiante, docente y conducta
    async fn create_registro(&self, req: CreateRegistroRequest) -> Result<RegistroConducta>;
    async fn get_registro_by_id(&self, id: i64) -> Result<Option<RegistroConducta>>;
    async fn list_registros(&self, query: RegistroListQuery) -> Result<RegistroListResponse>;
    // Listados sin paginar de la API, ordenados por fecha descendente
    async fn registros_por_estudiante(&self, estudiante_id: i64) -> Result<Vec<RegistroConducta>>;
    async fn registros_por_docente(&self, docente_id: i64) -> Result<Vec<RegistroConducta>>;
    async fn registros_por_fecha(&self, fecha: chrono::NaiveDate) -> Result<Vec<RegistroConducta>>;
    async fn registros_por_rango(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<RegistroConducta>>;
    async fn update_registro(
        &self,
        id: i64,
        update: UpdateRegistroRequest,
    ) -> Result<Option<RegistroConducta>>;
    // Marca leido y estampa la fecha de lectura
    async fn marcar_registro_leido(&self, id: i64) -> Result<Option<RegistroConducta>>;
    // Unica transicion de estado: ACTIVO -> RESUELTO
    async fn cambiar_estado_registro(
        &self,
        id: i64,
        estado: EstadoRegistro,
    ) -> Result<Option<RegistroConducta>>;
    async fn delete_registro(&self, id: i64) -> Result<bool>;
    async fn count_registros(&self) -> Result<i64>;
    async fn count_registros_by_estado(&self, estado: EstadoRegistro) -> Result<i64>;
    async fn count_registros_by_leido(&self, leido: bool) -> Result<i64>;
    async fn count_registros_by_estudiante(&self, estudiante_id: i64) -> Result<i64>;
    async fn count_registros_by_docente(&self, docente_id: i64) -> Result<i64>;
    async fn registros_recientes(&self, limit: u64) -> Result<Vec<RegistroConducta>>;
    // Conteos agregados para reportes
    async fn count_registros_por_gravedad(&self) -> Result<Vec<ConteoPorGravedad>>;
    async fn count_registros_por_grado(&self) -> Result<Vec<ConteoPorGrado>>;
    async fn count_registros_por_mes(&self) -> Result<Vec<ConteoPorMes>>;

    /// Observaciones
    // Registrar observacion resolviendo estudiante y docente
    async fn create_observacion(&self, req: CreateObservacionRequest) -> Result<Observacion>;
    async fn get_observacion_by_id(&self, id: i64) -> Result<Option<Observacion>>;
    async fn list_observaciones(&self, query: ObservacionListQuery)
    -> Result<ObservacionListResponse>;
    async fn observaciones_por_estudiante(&self, estudiante_id: i64) -> Result<Vec<Observacion>>;
    async fn observaciones_por_docente(&self, docente_id: i64) -> Result<Vec<Observacion>>;
    async fn observaciones_por_fecha(&self, fecha: chrono::NaiveDate) -> Result<Vec<Observacion>>;
    async fn observaciones_por_rango(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<Observacion>>;
    async fn update_observacion(
        &self,
        id: i64,
        update: UpdateObservacionRequest,
    ) -> Result<Option<Observacion>>;
    async fn marcar_observacion_leida(&self, id: i64) -> Result<Option<Observacion>>;
    async fn delete_observacion(&self, id: i64) -> Result<bool>;
    async fn count_observaciones(&self) -> Result<i64>;
    async fn count_observaciones_by_estudiante(&self, estudiante_id: i64) -> Result<i64>;
    async fn count_observaciones_by_docente(&self, docente_id: i64) -> Result<i64>;
    async fn observaciones_recientes(&self, limit: u64) -> Result<Vec<Observacion>>;
    async fn count_observaciones_por_tipo(&self) -> Result<Vec<ConteoPorTipo>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
