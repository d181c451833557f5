use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::EstudianteService;
use crate::models::estudiantes::requests::CreateEstudianteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_nombre, validate_password_simple, validate_usuario};

/// El usuario debe ser unico entre las tres tablas: el login las prueba en
/// orden y un homonimo en otra tabla quedaria inaccesible.
pub(crate) async fn usuario_en_uso(
    storage: &Arc<dyn Storage>,
    usuario: &str,
) -> crate::errors::Result<bool> {
    Ok(storage.get_director_by_usuario(usuario).await?.is_some()
        || storage.get_docente_by_usuario(usuario).await?.is_some()
        || storage.get_estudiante_by_usuario(usuario).await?.is_some())
}

pub async fn handle_create(
    service: &EstudianteService,
    request: &HttpRequest,
    mut data: CreateEstudianteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_nombre(&data.nombres)
        .and_then(|_| validate_nombre(&data.apellidos))
        .and_then(|_| validate_usuario(&data.usuario))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    if let Err(msg) = validate_password_simple(&data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    match usuario_en_uso(&storage, &data.usuario).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "El usuario ya esta en uso",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo verificar el usuario: {e}"),
                )),
            );
        }
    }

    data.password = match hash_password(&data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo el hash de contrasena: {e}"),
                )),
            );
        }
    };

    match storage.create_estudiante(data).await {
        Ok(estudiante) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(estudiante, "Estudiante creado exitosamente"))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al crear el estudiante: {e}"),
        ))),
    }
}
