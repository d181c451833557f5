use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConductaService;
use crate::errors::ControlEduError;
use crate::models::conductas::requests::CreateConductaRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_nombre;

pub async fn handle_create(
    service: &ConductaService,
    request: &HttpRequest,
    data: CreateConductaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_nombre(&data.nombre_conducta) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    match storage.create_conducta(data).await {
        Ok(conducta) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(conducta, "Conducta creada exitosamente"))),
        Err(ControlEduError::RelationNotFound(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RelationNotFound, msg))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al crear la conducta: {e}"),
        ))),
    }
}
