//! API REST bajo /api
//!
//! A diferencia de la capa web por rol, estos endpoints devuelven los DTOs
//! planos sin el sobre ApiResponse y comunican el resultado con el status
//! HTTP: 200, 201, 204, 400, 404, 409.

pub mod conductas;
pub mod observaciones;
pub mod registros;

use actix_web::HttpResponse;

use crate::errors::ControlEduError;

// Mapeo comun de errores de storage a respuestas HTTP
pub(crate) fn map_storage_error(err: ControlEduError) -> HttpResponse {
    match err {
        ControlEduError::RelationNotFound(msg) => HttpResponse::BadRequest().json(msg),
        ControlEduError::NotFound(_) => HttpResponse::NotFound().finish(),
        ControlEduError::Validation(msg) => HttpResponse::BadRequest().json(msg),
        other => {
            tracing::error!("Error de storage en la API: {}", other);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    conductas::configure(cfg);
    observaciones::configure(cfg);
    registros::configure(cfg);
}
