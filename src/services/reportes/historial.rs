use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReporteService;
use crate::middlewares::RequireSession;
use crate::models::auth::entities::Principal;
use crate::models::historial::{ElementoHistorial, ordenar_historial};
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::registros::responses::RegistroConductaDTO;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_historial_docente(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let docente = match RequireSession::extract_principal(request) {
        Some(Principal::Docente(docente)) => docente,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de docente requerida",
            )));
        }
    };

    let storage = service.get_storage(request);

    let registros = match storage.registros_por_docente(docente.id).await {
        Ok(registros) => registros,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo armar el historial: {e}"),
                )),
            );
        }
    };
    let observaciones = match storage.observaciones_por_docente(docente.id).await {
        Ok(observaciones) => observaciones,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo armar el historial: {e}"),
                )),
            );
        }
    };

    // Lista combinada y ordenada por fecha descendente
    let mut elementos: Vec<ElementoHistorial> = registros
        .iter()
        .map(|r| ElementoHistorial::Incidente(RegistroConductaDTO::from_registro(r)))
        .collect();
    elementos.extend(
        observaciones
            .iter()
            .map(|o| ElementoHistorial::Observacion(ObservacionDTO::from_observacion(o))),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ordenar_historial(elementos),
        "Historial del docente",
    )))
}

pub async fn handle_historial_estudiante(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let estudiante = match RequireSession::extract_principal(request) {
        Some(Principal::Estudiante(estudiante)) => estudiante,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de estudiante requerida",
            )));
        }
    };

    let storage = service.get_storage(request);

    let registros = match storage.registros_por_estudiante(estudiante.id).await {
        Ok(registros) => registros,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo armar el historial: {e}"),
                )),
            );
        }
    };
    let observaciones = match storage.observaciones_por_estudiante(estudiante.id).await {
        Ok(observaciones) => observaciones,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo armar el historial: {e}"),
                )),
            );
        }
    };

    let mut elementos: Vec<ElementoHistorial> = registros
        .iter()
        .map(|r| ElementoHistorial::Incidente(RegistroConductaDTO::from_registro(r)))
        .collect();
    elementos.extend(
        observaciones
            .iter()
            .map(|o| ElementoHistorial::Observacion(ObservacionDTO::from_observacion(o))),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ordenar_historial(elementos),
        "Historial del estudiante",
    )))
}
