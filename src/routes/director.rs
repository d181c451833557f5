use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::Rol;
use crate::models::conductas::requests::ConductaListQuery;
use crate::models::docentes::requests::DocenteListQuery;
use crate::models::estudiantes::requests::EstudianteListQuery;
use crate::models::observaciones::requests::ObservacionListQuery;
use crate::models::registros::entities::EstadoRegistro;
use crate::models::registros::requests::RegistroListQuery;
use crate::services::{
    AuthService, ConductaService, DocenteService, EstudianteService, ObservacionService,
    RegistroService, ReporteService,
};
use crate::utils::SafeIdI64;

// Instancias globales perezosas de los servicios del director
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);
static CONDUCTA_SERVICE: Lazy<ConductaService> = Lazy::new(ConductaService::new_lazy);
static DOCENTE_SERVICE: Lazy<DocenteService> = Lazy::new(DocenteService::new_lazy);
static ESTUDIANTE_SERVICE: Lazy<EstudianteService> = Lazy::new(EstudianteService::new_lazy);
static OBSERVACION_SERVICE: Lazy<ObservacionService> = Lazy::new(ObservacionService::new_lazy);
static REGISTRO_SERVICE: Lazy<RegistroService> = Lazy::new(RegistroService::new_lazy);
static REPORTE_SERVICE: Lazy<ReporteService> = Lazy::new(ReporteService::new_lazy);

// Panel con metricas globales y actividad reciente
pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.dashboard_director(&req).await
}

pub async fn incidentes(
    req: HttpRequest,
    query: web::Query<RegistroListQuery>,
) -> ActixResult<HttpResponse> {
    REGISTRO_SERVICE.list(&req, query.into_inner()).await
}

// Abrir el detalle marca el incidente como leido
pub async fn incidente_detalle(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    REGISTRO_SERVICE.detail(&req, id.0, true).await
}

pub async fn incidente_marcar_leido(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    REGISTRO_SERVICE.marcar_leido(&req, id.0).await
}

pub async fn incidente_resolver(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    REGISTRO_SERVICE
        .cambiar_estado(&req, id.0, EstadoRegistro::Resuelto)
        .await
}

pub async fn observaciones(
    req: HttpRequest,
    query: web::Query<ObservacionListQuery>,
) -> ActixResult<HttpResponse> {
    OBSERVACION_SERVICE.list(&req, query.into_inner()).await
}

pub async fn observacion_detalle(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    OBSERVACION_SERVICE.detail(&req, id.0, true).await
}

pub async fn observacion_marcar_leida(
    req: HttpRequest,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    OBSERVACION_SERVICE.marcar_leida(&req, id.0).await
}

pub async fn observacion_eliminar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    OBSERVACION_SERVICE.delete(&req, id.0).await
}

pub async fn estudiantes(
    req: HttpRequest,
    query: web::Query<EstudianteListQuery>,
) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.list(&req, query.into_inner()).await
}

pub async fn docentes(
    req: HttpRequest,
    query: web::Query<DocenteListQuery>,
) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.list(&req, query.into_inner()).await
}

pub async fn conductas(
    req: HttpRequest,
    query: web::Query<ConductaListQuery>,
) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.list(&req, query.into_inner()).await
}

pub async fn reportes(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORTE_SERVICE.reporte_general(&req).await
}

pub async fn perfil(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&req).await
}

// Configuracion de rutas
pub fn configure_director_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/director")
            .wrap(middlewares::RequireRol::new(&Rol::Director))
            .wrap(middlewares::RequireSession)
            .route("/dashboard", web::get().to(dashboard))
            .route("/incidentes", web::get().to(incidentes))
            .route("/incidentes/detalle/{id}", web::get().to(incidente_detalle))
            .route(
                "/incidentes/marcar-leido/{id}",
                web::post().to(incidente_marcar_leido),
            )
            .route("/incidentes/resolver/{id}", web::post().to(incidente_resolver))
            .route("/observaciones", web::get().to(observaciones))
            .route(
                "/observaciones/detalle/{id}",
                web::get().to(observacion_detalle),
            )
            .route(
                "/observaciones/marcar-leida/{id}",
                web::post().to(observacion_marcar_leida),
            )
            .route(
                "/observaciones/eliminar/{id}",
                web::post().to(observacion_eliminar),
            )
            .route("/estudiantes", web::get().to(estudiantes))
            .route("/docentes", web::get().to(docentes))
            .route("/conductas", web::get().to(conductas))
            .route("/reportes", web::get().to(reportes))
            .route("/perfil", web::get().to(perfil)),
    );
}
