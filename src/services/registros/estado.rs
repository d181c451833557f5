use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RegistroService;
use crate::models::registros::entities::EstadoRegistro;
use crate::models::registros::responses::RegistroConductaDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_marcar_leido(
    service: &RegistroService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.marcar_registro_leido(id).await {
        Ok(Some(registro)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RegistroConductaDTO::from_registro(&registro),
            "Incidente marcado como leido",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Incidente no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al marcar como leido: {e}"),
            )),
        ),
    }
}

pub async fn handle_cambiar_estado(
    service: &RegistroService,
    request: &HttpRequest,
    id: i64,
    estado: EstadoRegistro,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mensaje = match estado {
        EstadoRegistro::Resuelto => "Incidente marcado como resuelto",
        EstadoRegistro::Activo => "Incidente reactivado",
    };

    match storage.cambiar_estado_registro(id, estado).await {
        Ok(Some(registro)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RegistroConductaDTO::from_registro(&registro),
            mensaje,
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Incidente no encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Error al cambiar el estado: {e}"),
            )),
        ),
    }
}
