use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservacionService;
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_detail(
    service: &ObservacionService,
    request: &HttpRequest,
    id: i64,
    auto_marcar: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let observacion = match storage.get_observacion_by_id(id).await {
        Ok(Some(observacion)) => observacion,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Observacion no encontrada",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo buscar observacion: {e}"),
                )),
            );
        }
    };

    // Abrir el detalle la marca como leida; si el marcado falla se
    // entrega igual el detalle
    let observacion = if auto_marcar && !observacion.leido {
        match storage.marcar_observacion_leida(id).await {
            Ok(Some(actualizada)) => actualizada,
            Ok(None) => observacion,
            Err(e) => {
                tracing::warn!("No se pudo marcar como leida la observacion {}: {}", id, e);
                observacion
            }
        }
    } else {
        observacion
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ObservacionDTO::from_observacion(&observacion),
        "Detalle de la observacion",
    )))
}
