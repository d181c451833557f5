use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &ConductaService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Una conducta con registros asociados no se elimina; se desactiva con
    // el interruptor `activo` para preservar el historial
    match storage.count_registros_by_conducta(id).await {
        Ok(0) => {}
        Ok(_) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "La conducta tiene registros asociados; desactivela en su lugar",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo verificar referencias: {e}"),
                )),
            );
        }
    }

    match storage.delete_conducta(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Conducta eliminada exitosamente")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Conducta no encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al eliminar la conducta: {e}"),
            )),
        ),
    }
}
