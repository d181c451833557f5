use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservacionService;
use crate::models::observaciones::requests::ObservacionListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &ObservacionService,
    request: &HttpRequest,
    query: ObservacionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_observaciones(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Listado de observaciones")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar observaciones: {e}"),
            )),
        ),
    }
}
