use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::models::conductas::requests::ConductaListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &ConductaService,
    request: &HttpRequest,
    query: ConductaListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_conductas(query).await {
        Ok(conductas) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(conductas, "Catalogo de conductas")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar conductas: {e}"),
            )),
        ),
    }
}
