use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EstudianteService;
use crate::models::estudiantes::requests::UpdateEstudianteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn handle_update(
    service: &EstudianteService,
    request: &HttpRequest,
    id: i64,
    mut data: UpdateEstudianteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // La contrasena entra hasheada si viene en la peticion
    if let Some(ref password) = data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
        }

        data.password = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Fallo el hash de contrasena: {e}"),
                    )),
                );
            }
        };
    }

    match storage.update_estudiante(id, data).await {
        Ok(Some(estudiante)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(estudiante, "Estudiante actualizado exitosamente"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Estudiante no encontrado",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al actualizar el estudiante: {e}"),
        ))),
    }
}
