use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReporteService;
use crate::middlewares::RequireSession;
use crate::models::auth::entities::Principal;
use crate::models::reportes::responses::MisConductasResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_mis_conductas(
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

    match storage.registros_por_estudiante(estudiante.id).await {
        Ok(registros) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MisConductasResponse::agrupar(&registros),
            "Registros agrupados por gravedad",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo agrupar los registros: {e}"),
            )),
        ),
    }
}
