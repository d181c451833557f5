//! Implementacion de almacenamiento con SeaORM
//!
//! Capa unica de persistencia con soporte para SQLite, PostgreSQL y MySQL.

mod conductas;
mod directores;
mod docentes;
mod estudiantes;
mod gravedades;
mod observaciones;
mod registros;

use crate::config::AppConfig;
use crate::errors::{ControlEduError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// Almacenamiento sobre SeaORM
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Crea la instancia de almacenamiento
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // La conexion depende del tipo de base
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // Ejecutar migraciones
        Migrator::up(&db, None)
            .await
            .map_err(|e| ControlEduError::database_operation(format!("Fallo la migracion: {e}")))?;

        info!("Almacenamiento SeaORM inicializado, base de datos: {}", db_url);

        Ok(Self { db })
    }

    /// Conexion especifica para SQLite (WAL + pragmas)
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                ControlEduError::database_config(format!("URL de SQLite invalida: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                ControlEduError::database_connection(format!("Fallo la conexion SQLite: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Conexion generica (PostgreSQL, MySQL)
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| {
                ControlEduError::database_connection(format!("No se pudo conectar a la base: {e}"))
            })
    }

    /// Infere el tipo de base desde la URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ControlEduError::database_config(format!(
                "No se pudo inferir el tipo de base desde la URL: {url}. Soportados: sqlite://, postgres://, mysql://, o rutas .db/.sqlite"
            )))
        }
    }
}

// Implementacion del trait Storage
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Directores
    async fn create_director(&self, req: CreateDirectorRequest) -> Result<Director> {
        self.create_director_impl(req).await
    }

    async fn get_director_by_id(&self, id: i64) -> Result<Option<Director>> {
        self.get_director_by_id_impl(id).await
    }

    async fn get_director_by_usuario(&self, usuario: &str) -> Result<Option<Director>> {
        self.get_director_by_usuario_impl(usuario).await
    }

    async fn update_director(
        &self,
        id: i64,
        update: UpdateDirectorRequest,
    ) -> Result<Option<Director>> {
        self.update_director_impl(id, update).await
    }

    async fn count_directores(&self) -> Result<i64> {
        self.count_directores_impl().await
    }

    // Docentes
    async fn create_docente(&self, req: CreateDocenteRequest) -> Result<Docente> {
        self.create_docente_impl(req).await
    }

    async fn get_docente_by_id(&self, id: i64) -> Result<Option<Docente>> {
        self.get_docente_by_id_impl(id).await
    }

    async fn get_docente_by_usuario(&self, usuario: &str) -> Result<Option<Docente>> {
        self.get_docente_by_usuario_impl(usuario).await
    }

    async fn list_docentes(&self, query: DocenteListQuery) -> Result<DocenteListResponse> {
        self.list_docentes_impl(query).await
    }

    async fn update_docente(
        &self,
        id: i64,
        update: UpdateDocenteRequest,
    ) -> Result<Option<Docente>> {
        self.update_docente_impl(id, update).await
    }

    async fn delete_docente(&self, id: i64) -> Result<bool> {
        self.delete_docente_impl(id).await
    }

    async fn count_docentes(&self) -> Result<i64> {
        self.count_docentes_impl().await
    }

    async fn docente_tiene_referencias(&self, id: i64) -> Result<bool> {
        self.docente_tiene_referencias_impl(id).await
    }

    // Estudiantes
    async fn create_estudiante(&self, req: CreateEstudianteRequest) -> Result<Estudiante> {
        self.create_estudiante_impl(req).await
    }

    async fn get_estudiante_by_id(&self, id: i64) -> Result<Option<Estudiante>> {
        self.get_estudiante_by_id_impl(id).await
    }

    async fn get_estudiante_by_usuario(&self, usuario: &str) -> Result<Option<Estudiante>> {
        self.get_estudiante_by_usuario_impl(usuario).await
    }

    async fn list_estudiantes(&self, query: EstudianteListQuery) -> Result<EstudianteListResponse> {
        self.list_estudiantes_impl(query).await
    }

    async fn update_estudiante(
        &self,
        id: i64,
        update: UpdateEstudianteRequest,
    ) -> Result<Option<Estudiante>> {
        self.update_estudiante_impl(id, update).await
    }

    async fn delete_estudiante(&self, id: i64) -> Result<bool> {
        self.delete_estudiante_impl(id).await
    }

    async fn count_estudiantes(&self) -> Result<i64> {
        self.count_estudiantes_impl().await
    }

    async fn grados_distinct(&self) -> Result<Vec<String>> {
        self.grados_distinct_impl().await
    }

    async fn secciones_distinct(&self) -> Result<Vec<String>> {
        self.secciones_distinct_impl().await
    }

    async fn estudiante_tiene_referencias(&self, id: i64) -> Result<bool> {
        self.estudiante_tiene_referencias_impl(id).await
    }

    // Tipos de gravedad
    async fn list_gravedades(&self) -> Result<Vec<TipoGravedad>> {
        self.list_gravedades_impl().await
    }

    async fn get_gravedad_by_id(&self, id: i64) -> Result<Option<TipoGravedad>> {
        self.get_gravedad_by_id_impl(id).await
    }

    async fn get_gravedad_by_nombre(&self, nombre: &str) -> Result<Option<TipoGravedad>> {
        self.get_gravedad_by_nombre_impl(nombre).await
    }

    async fn count_gravedades(&self) -> Result<i64> {
        self.count_gravedades_impl().await
    }

    async fn create_gravedad(
        &self,
        nombre: &str,
        descripcion: &str,
        puntos: i32,
    ) -> Result<TipoGravedad> {
        self.create_gravedad_impl(nombre, descripcion, puntos).await
    }

    // Conductas
    async fn create_conducta(&self, req: CreateConductaRequest) -> Result<Conducta> {
        self.create_conducta_impl(req).await
    }

    async fn get_conducta_by_id(&self, id: i64) -> Result<Option<Conducta>> {
        self.get_conducta_by_id_impl(id).await
    }

    async fn list_conductas(&self, query: ConductaListQuery) -> Result<Vec<Conducta>> {
        self.list_conductas_impl(query).await
    }

    async fn update_conducta(
        &self,
        id: i64,
        update: UpdateConductaRequest,
    ) -> Result<Option<Conducta>> {
        self.update_conducta_impl(id, update).await
    }

    async fn delete_conducta(&self, id: i64) -> Result<bool> {
        self.delete_conducta_impl(id).await
    }

    async fn set_conducta_activa(&self, id: i64, activo: bool) -> Result<Option<Conducta>> {
        self.set_conducta_activa_impl(id, activo).await
    }

    async fn count_conductas(&self) -> Result<i64> {
        self.count_conductas_impl().await
    }

    async fn count_registros_by_conducta(&self, conducta_id: i64) -> Result<i64> {
        self.count_registros_by_conducta_impl(conducta_id).await
    }

    async fn conductas_mas_utilizadas(&self) -> Result<Vec<ConductaUsoDTO>> {
        self.conductas_mas_utilizadas_impl().await
    }

    async fn conductas_no_utilizadas(&self) -> Result<Vec<Conducta>> {
        self.conductas_no_utilizadas_impl().await
    }

    // Registros de conducta
    async fn create_registro(&self, req: CreateRegistroRequest) -> Result<RegistroConducta> {
        self.create_registro_impl(req).await
    }

    async fn get_registro_by_id(&self, id: i64) -> Result<Option<RegistroConducta>> {
        self.get_registro_by_id_impl(id).await
    }

    async fn list_registros(&self, query: RegistroListQuery) -> Result<RegistroListResponse> {
        self.list_registros_impl(query).await
    }

    async fn registros_por_estudiante(&self, estudiante_id: i64) -> Result<Vec<RegistroConducta>> {
        self.registros_por_estudiante_impl(estudiante_id).await
    }

    async fn registros_por_docente(&self, docente_id: i64) -> Result<Vec<RegistroConducta>> {
        self.registros_por_docente_impl(docente_id).await
    }

    async fn registros_por_fecha(&self, fecha: chrono::NaiveDate) -> Result<Vec<RegistroConducta>> {
        self.registros_por_fecha_impl(fecha).await
    }

    async fn registros_por_rango(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<RegistroConducta>> {
        self.registros_por_rango_impl(inicio, fin).await
    }

    async fn update_registro(
        &self,
        id: i64,
        update: UpdateRegistroRequest,
    ) -> Result<Option<RegistroConducta>> {
        self.update_registro_impl(id, update).await
    }

    async fn marcar_registro_leido(&self, id: i64) -> Result<Option<RegistroConducta>> {
        self.marcar_registro_leido_impl(id).await
    }

    async fn cambiar_estado_registro(
        &self,
        id: i64,
        estado: EstadoRegistro,
    ) -> Result<Option<RegistroConducta>> {
        self.cambiar_estado_registro_impl(id, estado).await
    }

    async fn delete_registro(&self, id: i64) -> Result<bool> {
        self.delete_registro_impl(id).await
    }

    async fn count_registros(&self) -> Result<i64> {
        self.count_registros_impl().await
    }

    async fn count_registros_by_estado(&self, estado: EstadoRegistro) -> Result<i64> {
        self.count_registros_by_estado_impl(estado).await
    }

    async fn count_registros_by_leido(&self, leido: bool) -> Result<i64> {
        self.count_registros_by_leido_impl(leido).await
    }

    async fn count_registros_by_estudiante(&self, estudiante_id: i64) -> Result<i64> {
        self.count_registros_by_estudiante_impl(estudiante_id).await
    }

    async fn count_registros_by_docente(&self, docente_id: i64) -> Result<i64> {
        self.count_registros_by_docente_impl(docente_id).await
    }

    async fn registros_recientes(&self, limit: u64) -> Result<Vec<RegistroConducta>> {
        self.registros_recientes_impl(limit).await
    }

    async fn count_registros_por_gravedad(&self) -> Result<Vec<ConteoPorGravedad>> {
        self.count_registros_por_gravedad_impl().await
    }

    async fn count_registros_por_grado(&self) -> Result<Vec<ConteoPorGrado>> {
        self.count_registros_por_grado_impl().await
    }

    async fn count_registros_por_mes(&self) -> Result<Vec<ConteoPorMes>> {
        self.count_registros_por_mes_impl().await
    }

    // Observaciones
    async fn create_observacion(&self, req: CreateObservacionRequest) -> Result<Observacion> {
        self.create_observacion_impl(req).await
    }

    async fn get_observacion_by_id(&self, id: i64) -> Result<Option<Observacion>> {
        self.get_observacion_by_id_impl(id).await
    }

    async fn list_observaciones(
        &self,
        query: ObservacionListQuery,
    ) -> Result<ObservacionListResponse> {
        self.list_observaciones_impl(query).await
    }

    async fn observaciones_por_estudiante(&self, estudiante_id: i64) -> Result<Vec<Observacion>> {
        self.observaciones_por_estudiante_impl(estudiante_id).await
    }

    async fn observaciones_por_docente(&self, docente_id: i64) -> Result<Vec<Observacion>> {
        self.observaciones_por_docente_impl(docente_id).await
    }

    async fn observaciones_por_fecha(&self, fecha: chrono::NaiveDate) -> Result<Vec<Observacion>> {
        self.observaciones_por_fecha_impl(fecha).await
    }

    async fn observaciones_por_rango(
        &self,
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    ) -> Result<Vec<Observacion>> {
        self.observaciones_por_rango_impl(inicio, fin).await
    }

    async fn update_observacion(
        &self,
        id: i64,
        update: UpdateObservacionRequest,
    ) -> Result<Option<Observacion>> {
        self.update_observacion_impl(id, update).await
    }

    async fn marcar_observacion_leida(&self, id: i64) -> Result<Option<Observacion>> {
        self.marcar_observacion_leida_impl(id).await
    }

    async fn delete_observacion(&self, id: i64) -> Result<bool> {
        self.delete_observacion_impl(id).await
    }

    async fn count_observaciones(&self) -> Result<i64> {
        self.count_observaciones_impl().await
    }

    async fn count_observaciones_by_estudiante(&self, estudiante_id: i64) -> Result<i64> {
        self.count_observaciones_by_estudiante_impl(estudiante_id)
            .await
    }

    async fn count_observaciones_by_docente(&self, docente_id: i64) -> Result<i64> {
        self.count_observaciones_by_docente_impl(docente_id).await
    }

    async fn observaciones_recientes(&self, limit: u64) -> Result<Vec<Observacion>> {
        self.observaciones_recientes_impl(limit).await
    }

    async fn count_observaciones_por_tipo(&self) -> Result<Vec<ConteoPorTipo>> {
        self.count_observaciones_por_tipo_impl().await
    }
}
