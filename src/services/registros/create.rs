use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RegistroService;
use crate::errors::ControlEduError;
use crate::models::registros::requests::CreateRegistroRequest;
use crate::models::registros::responses::RegistroConductaDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_registrar_incidente(
    service: &RegistroService,
    request: &HttpRequest,
    data: CreateRegistroRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_registro(data).await {
        Ok(registro) => {
            tracing::info!(
                "Incidente registrado: estudiante {} / conducta {}",
                registro.estudiante.id,
                registro.conducta.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegistroConductaDTO::from_registro(&registro),
                "Incidente registrado exitosamente",
            )))
        }
        // IDs que no resolvieron: nada quedo persistido
        Err(ControlEduError::RelationNotFound(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RelationNotFound, msg))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Error al registrar el incidente: {e}"),
        ))),
    }
}
