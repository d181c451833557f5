use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_set_activa(
    service: &ConductaService,
    request: &HttpRequest,
    id: i64,
    activo: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mensaje = if activo {
        "Conducta activada exitosamente"
    } else {
        "Conducta desactivada exitosamente"
    };

    match storage.set_conducta_activa(id, activo).await {
        Ok(Some(conducta)) => Ok(HttpResponse::Ok().json(ApiResponse::success(conducta, mensaje))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Conducta no encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al cambiar la activacion: {e}"),
            )),
        ),
    }
}
