use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireSession};
use crate::models::auth::Rol;
use crate::models::conductas::requests::ConductaListQuery;
use crate::models::estudiantes::requests::EstudianteListQuery;
use crate::models::observaciones::requests::RegistrarObservacionRequest;
use crate::models::registros::requests::RegistrarFaltaRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{
    AuthService, ConductaService, EstudianteService, ObservacionService, RegistroService,
    ReporteService,
};

// Instancias globales perezosas de los servicios del docente
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);
static CONDUCTA_SERVICE: Lazy<ConductaService> = Lazy::new(ConductaService::new_lazy);
static ESTUDIANTE_SERVICE: Lazy<EstudianteService> = Lazy::new(EstudianteService::new_lazy);
static OBSERVACION_SERVICE: Lazy<ObservacionService> = Lazy::new(ObservacionService::new_lazy);
static REGISTRO_SERVICE: Lazy<RegistroService> = Lazy::new(RegistroService::new_lazy);
static REPORTE_SERVICE: Lazy<ReporteService> = Lazy::new(ReporteService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.dashboard_docente(&req).await
}

// Listado de estudiantes de solo lectura
pub async fn estudiantes(
    req: HttpRequest,
    query: web::Query<EstudianteListQuery>,
) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.list(&req, query.into_inner()).await
}

// Catalogo de conductas para el formulario de registro
pub async fn conductas(
    req: HttpRequest,
    query: web::Query<ConductaListQuery>,
) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.list(&req, query.into_inner()).await
}

// El docente que reporta sale de la sesion
pub async fn registrar_falta(
    req: HttpRequest,
    data: web::Json<RegistrarFaltaRequest>,
) -> ActixResult<HttpResponse> {
    let docente_id = match RequireSession::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de docente requerida",
            )));
        }
    };

    REGISTRO_SERVICE
        .registrar_incidente(&req, data.into_inner().into_create(docente_id))
        .await
}

pub async fn registrar_observacion(
    req: HttpRequest,
    data: web::Json<RegistrarObservacionRequest>,
) -> ActixResult<HttpResponse> {
    let docente_id = match RequireSession::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion de docente requerida",
            )));
        }
    };

    OBSERVACION_SERVICE
        .registrar_observacion(&req, data.into_inner().into_create(docente_id))
        .await
}

// Incidentes y observaciones propios en una sola linea de tiempo
pub async fn historial(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.historial_docente(&req).await
}

pub async fn perfil(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&req).await
}

// Configuracion de rutas
pub fn configure_docente_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/docente")
            .wrap(middlewares::RequireRol::new(&Rol::Docente))
            .wrap(middlewares::RequireSession)
            .route("/dashboard", web::get().to(dashboard))
            .route("/estudiantes", web::get().to(estudiantes))
            .route("/conductas", web::get().to(conductas))
            .route("/registrar-falta", web::post().to(registrar_falta))
            .route(
                "/registrar-observacion",
                web::post().to(registrar_observacion),
            )
            .route("/historial", web::get().to(historial))
            .route("/perfil", web::get().to(perfil)),
    );
}
