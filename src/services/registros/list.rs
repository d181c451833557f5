use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RegistroService;
use crate::models::registros::requests::RegistroListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &RegistroService,
    request: &HttpRequest,
    query: RegistroListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_registros(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Listado de incidentes")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar incidentes: {e}"),
            )),
        ),
    }
}
