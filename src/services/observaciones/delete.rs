use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservacionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &ObservacionService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_observacion(id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Observacion eliminada exitosamente"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Observacion no encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al eliminar la observacion: {e}"),
            )),
        ),
    }
}
