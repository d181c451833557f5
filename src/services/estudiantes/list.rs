use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::EstudianteService;
use crate::models::estudiantes::requests::EstudianteListQuery;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct CatalogosEstudianteResponse {
    pub grados: Vec<String>,
    pub secciones: Vec<String>,
}

pub async fn handle_list(
    service: &EstudianteService,
    request: &HttpRequest,
    query: EstudianteListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_estudiantes(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Listado de estudiantes"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo listar estudiantes: {e}"),
            )),
        ),
    }
}

pub async fn handle_catalogos(
    service: &EstudianteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let grados = match storage.grados_distinct().await {
        Ok(grados) => grados,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo listar grados: {e}"),
                )),
            );
        }
    };

    let secciones = match storage.secciones_distinct().await {
        Ok(secciones) => secciones,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo listar secciones: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CatalogosEstudianteResponse { grados, secciones },
        "Catalogos de grados y secciones",
    )))
}
