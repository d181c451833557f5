use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_mas_utilizadas(
    service: &ConductaService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.conductas_mas_utilizadas().await {
        Ok(conductas) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(conductas, "Conductas por numero de usos"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo contar usos: {e}"),
            )),
        ),
    }
}

pub async fn handle_no_utilizadas(
    service: &ConductaService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.conductas_no_utilizadas().await {
        Ok(conductas) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(conductas, "Conductas sin registros asociados"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar conductas sin uso: {e}"),
            )),
        ),
    }
}
