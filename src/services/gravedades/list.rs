use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GravedadService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &GravedadService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_gravedades().await {
        Ok(gravedades) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(gravedades, "Niveles de gravedad"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar gravedades: {e}"),
            )),
        ),
    }
}
