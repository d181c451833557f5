use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservacionService;
use crate::errors::ControlEduError;
use crate::models::observaciones::requests::CreateObservacionRequest;
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_nombre;

pub async fn handle_registrar_observacion(
    service: &ObservacionService,
    request: &HttpRequest,
    data: CreateObservacionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // El tipo es texto libre pero no puede venir vacio
    if validate_nombre(&data.tipo_observacion).is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "El tipo de observacion no puede estar vacio",
        )));
    }

    if validate_nombre(&data.descripcion).is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "La descripcion no puede estar vacia",
        )));
    }

    match storage.create_observacion(data).await {
        Ok(observacion) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ObservacionDTO::from_observacion(&observacion),
            "Observacion registrada exitosamente",
        ))),
        Err(ControlEduError::RelationNotFound(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RelationNotFound, msg))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al registrar la observacion: {e}"),
        ))),
    }
}
