use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EstudianteService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &EstudianteService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Politica de borrado: se bloquea mientras existan registros u
    // observaciones que lo referencien
    match storage.estudiante_tiene_referencias(id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "El estudiante tiene registros u observaciones asociados",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo verificar referencias: {e}"),
                )),
            );
        }
    }

    match storage.delete_estudiante(id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Estudiante eliminado exitosamente"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Estudiante no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al eliminar el estudiante: {e}"),
            )),
        ),
    }
}
