use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocenteService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &DocenteService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Se bloquea mientras existan registros u observaciones del docente
    match storage.docente_tiene_referencias(id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "El docente tiene registros u observaciones asociados",
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

    match storage.delete_docente(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Docente eliminado exitosamente")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Docente no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al eliminar el docente: {e}"),
            )),
        ),
    }
}
