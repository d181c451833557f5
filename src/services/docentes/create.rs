use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocenteService;
use crate::models::docentes::requests::CreateDocenteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::estudiantes::create::usuario_en_uso;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_nombre, validate_password_simple, validate_usuario};

pub async fn handle_create(
    service: &DocenteService,
    request: &HttpRequest,
    mut data: CreateDocenteRequest,
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

    match storage.create_docente(data).await {
        Ok(docente) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(docente, "Docente creado exitosamente"))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al crear el docente: {e}"),
        ))),
    }
}
