use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReporteService;
use crate::middlewares::RequireSession;
use crate::models::auth::entities::Principal;
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::registros::responses::RegistroConductaDTO;
use crate::models::reportes::responses::{
    DashboardDirectorResponse, DashboardDocenteResponse, DashboardEstudianteResponse,
    ResumenGeneral, promedio_incidentes,
};
use crate::models::{ApiResponse, ErrorCode};

const RECIENTES: u64 = 5;

fn error_interno(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Fallo armar el panel: {e}"),
    ))
}

pub async fn handle_dashboard_director(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let total_estudiantes = match storage.count_estudiantes().await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_docentes = match storage.count_docentes().await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_incidentes = match storage.count_registros().await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_observaciones = match storage.count_observaciones().await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_no_leidos = match storage.count_registros_by_leido(false).await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };

    let incidentes_recientes = match storage.registros_recientes(RECIENTES).await {
        Ok(registros) => registros
            .iter()
            .map(RegistroConductaDTO::from_registro)
            .collect(),
        Err(e) => return Ok(error_interno(e)),
    };
    let observaciones_recientes = match storage.observaciones_recientes(RECIENTES).await {
        Ok(observaciones) => observaciones
            .iter()
            .map(ObservacionDTO::from_observacion)
            .collect(),
        Err(e) => return Ok(error_interno(e)),
    };

    let response = DashboardDirectorResponse {
        resumen: ResumenGeneral {
            total_estudiantes,
            total_docentes,
            total_incidentes,
            total_observaciones,
            promedio_incidentes_por_estudiante: promedio_incidentes(
                total_incidentes,
                total_estudiantes,
            ),
        },
        total_no_leidos,
        incidentes_recientes,
        observaciones_recientes,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Panel del director")))
}

pub async fn handle_dashboard_docente(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let docente = match RequireSession::extract_principal(request) {
        Some(Principal::Docente(docente)) => docente,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de docente requerida",
            )));
        }
    };

    let total_incidentes = match storage.count_registros_by_docente(docente.id).await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_observaciones = match storage.count_observaciones_by_docente(docente.id).await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let incidentes_recientes = match storage.registros_por_docente(docente.id).await {
        Ok(registros) => registros
            .iter()
            .take(RECIENTES as usize)
            .map(RegistroConductaDTO::from_registro)
            .collect(),
        Err(e) => return Ok(error_interno(e)),
    };

    let response = DashboardDocenteResponse {
        docente,
        total_incidentes,
        total_observaciones,
        incidentes_recientes,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Panel del docente")))
}

pub async fn handle_dashboard_estudiante(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let estudiante = match RequireSession::extract_principal(request) {
        Some(Principal::Estudiante(estudiante)) => estudiante,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de estudiante requerida",
            )));
        }
    };

    let total_faltas = match storage.count_registros_by_estudiante(estudiante.id).await {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let total_observaciones = match storage
        .count_observaciones_by_estudiante(estudiante.id)
        .await
    {
        Ok(total) => total,
        Err(e) => return Ok(error_interno(e)),
    };
    let faltas_recientes = match storage.registros_por_estudiante(estudiante.id).await {
        Ok(registros) => registros
            .iter()
            .take(RECIENTES as usize)
            .map(RegistroConductaDTO::from_registro)
            .collect(),
        Err(e) => return Ok(error_interno(e)),
    };

    let response = DashboardEstudianteResponse {
        estudiante,
        total_faltas,
        total_observaciones,
        faltas_recientes,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Panel del estudiante")))
}
