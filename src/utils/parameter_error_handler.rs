use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// Convierte errores de deserializacion JSON en una respuesta 400 con el
/// sobre estandar
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Cuerpo JSON invalido: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

/// Convierte errores de query string en una respuesta 400 con el sobre
/// estandar
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Parametros de consulta invalidos: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
