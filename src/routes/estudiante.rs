use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireSession};
use crate::models::auth::Rol;
use crate::models::observaciones::requests::ObservacionListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{AuthService, ObservacionService, ReporteService};

// Instancias globales perezosas de los servicios del estudiante
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);
static OBSERVACION_SERVICE: Lazy<ObservacionService> = Lazy::new(ObservacionService::new_lazy);
static REPORTE_SERVICE: Lazy<ReporteService> = Lazy::new(ReporteService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.dashboard_estudiante(&req).await
}

pub async fn historial(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.historial_estudiante(&req).await
}

// Registros propios agrupados por gravedad
pub async fn conductas(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.mis_conductas(&req).await
}

// Observaciones propias; el filtro de estudiante se fija con la sesion
pub async fn observaciones(
    req: HttpRequest,
    query: web::Query<ObservacionListQuery>,
) -> ActixResult<HttpResponse> {
    let estudiante_id = match RequireSession::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de estudiante requerida",
            )));
        }
    };

    let mut query = query.into_inner();
    query.estudiante_id = Some(estudiante_id);
    query.docente_id = None;

    OBSERVACION_SERVICE.list(&req, query).await
}

pub async fn perfil(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&req).await
}

// Configuracion de rutas
pub fn configure_estudiante_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/estudiante")
            .wrap(middlewares::RequireRol::new(&Rol::Estudiante))
            .wrap(middlewares::RequireSession)
            .route("/dashboard", web::get().to(dashboard))
            .route("/historial", web::get().to(historial))
            .route("/conductas", web::get().to(conductas))
            .route("/observaciones", web::get().to(observaciones))
            .route("/perfil", web::get().to(perfil)),
    );
}
