use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EstudianteService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get(
    service: &EstudianteService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_estudiante_by_id(id).await {
        Ok(Some(estudiante)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(estudiante, "Estudiante encontrado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Estudiante no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo buscar estudiante: {e}"),
            )),
        ),
    }
}
