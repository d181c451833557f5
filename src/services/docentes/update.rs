use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocenteService;
use crate::models::docentes::requests::UpdateDocenteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn handle_update(
    service: &DocenteService,
    request: &HttpRequest,
    id: i64,
    mut data: UpdateDocenteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    match storage.update_docente(id, data).await {
        Ok(Some(docente)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(docente, "Docente actualizado exitosamente"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Docente no encontrado",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al actualizar el docente: {e}"),
        ))),
    }
}
