use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RegistroService;
use crate::models::registros::responses::RegistroConductaDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_detail(
    service: &RegistroService,
    request: &HttpRequest,
    id: i64,
    auto_marcar: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let registro = match storage.get_registro_by_id(id).await {
        Ok(Some(registro)) => registro,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Incidente no encontrado",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo buscar incidente: {e}"),
                )),
            );
        }
    };

    // Abrir el detalle lo marca como leido; si el marcado falla se
    // entrega igual el detalle
    let registro = if auto_marcar && !registro.leido {
        match storage.marcar_registro_leido(id).await {
            Ok(Some(actualizado)) => actualizado,
            Ok(None) => registro,
            Err(e) => {
                tracing::warn!("No se pudo marcar como leido el incidente {}: {}", id, e);
                registro
            }
        }
    } else {
        registro
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RegistroConductaDTO::from_registro(&registro),
        "Detalle del incidente",
    )))
}
