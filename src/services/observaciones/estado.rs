use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservacionService;
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_marcar_leida(
    service: &ObservacionService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.marcar_observacion_leida(id).await {
        Ok(Some(observacion)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ObservacionDTO::from_observacion(&observacion),
            "Observacion marcada como leida",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Observacion no encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al marcar como leida: {e}"),
            )),
        ),
    }
}
