use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReporteService;
use crate::models::reportes::responses::{
    ReporteGeneralResponse, ResumenGeneral, promedio_incidentes,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_reporte_general(
    service: &ReporteService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let resultado = async {
        let total_estudiantes = storage.count_estudiantes().await?;
        let total_docentes = storage.count_docentes().await?;
        let total_incidentes = storage.count_registros().await?;
        let total_observaciones = storage.count_observaciones().await?;

        let incidentes_por_gravedad = storage.count_registros_por_gravedad().await?;
        let incidentes_por_grado = storage.count_registros_por_grado().await?;
        let incidentes_por_mes = storage.count_registros_por_mes().await?;
        let observaciones_por_tipo = storage.count_observaciones_por_tipo().await?;
        let conductas_mas_utilizadas = storage.conductas_mas_utilizadas().await?;
        let conductas_no_utilizadas = storage.conductas_no_utilizadas().await?;

        Ok::<_, crate::errors::ControlEduError>(ReporteGeneralResponse {
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
            incidentes_por_gravedad,
            incidentes_por_grado,
            incidentes_por_mes,
            observaciones_por_tipo,
            conductas_mas_utilizadas,
            conductas_no_utilizadas,
        })
    }
    .await;

    match resultado {
        Ok(reporte) => Ok(HttpResponse::Ok().json(ApiResponse::success(reporte, "Reporte general"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fallo armar el reporte: {e}"),
            )),
        ),
    }
}
