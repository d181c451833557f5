//! Modelos de negocio y DTOs de la API

pub mod auth;
pub mod common;
pub mod conductas;
pub mod directores;
pub mod docentes;
pub mod estudiantes;
pub mod gravedades;
pub mod historial;
pub mod observaciones;
pub mod registros;
pub mod reportes;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// Momento de arranque del proceso, expuesto como app_data
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
