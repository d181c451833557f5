use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocenteService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get(
    service: &DocenteService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_docente_by_id(id).await {
        Ok(Some(docente)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(docente, "Docente encontrado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Docente no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo buscar docente: {e}"),
            )),
        ),
    }
}
