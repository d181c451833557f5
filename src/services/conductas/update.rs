use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::errors::ControlEduError;
use crate::models::conductas::requests::UpdateConductaRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update(
    service: &ConductaService,
    request: &HttpRequest,
    id: i64,
    data: UpdateConductaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_conducta(id, data).await {
        Ok(Some(conducta)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(conducta, "Conducta actualizada exitosamente"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Conducta no encontrada",
        ))),
        Err(ControlEduError::RelationNotFound(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RelationNotFound, msg))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al actualizar la conducta: {e}"),
        ))),
    }
}
