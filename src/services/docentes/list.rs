use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocenteService;
use crate::models::docentes::requests::DocenteListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &DocenteService,
    request: &HttpRequest,
    query: DocenteListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_docentes(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Listado de docentes")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar docentes: {e}"),
            )),
        ),
    }
}
