use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::Rol;
use crate::models::conductas::requests::{
    ConductaListQuery, CreateConductaRequest, UpdateConductaRequest,
};
use crate::models::docentes::requests::{
    CreateDocenteRequest, DocenteListQuery, UpdateDocenteRequest,
};
use crate::models::estudiantes::requests::{
    CreateEstudianteRequest, EstudianteListQuery, UpdateEstudianteRequest,
};
use crate::services::{ConductaService, DocenteService, EstudianteService, GravedadService};
use crate::utils::SafeIdI64;

// Instancias globales perezosas de los servicios de gestion
static CONDUCTA_SERVICE: Lazy<ConductaService> = Lazy::new(ConductaService::new_lazy);
static DOCENTE_SERVICE: Lazy<DocenteService> = Lazy::new(DocenteService::new_lazy);
static ESTUDIANTE_SERVICE: Lazy<EstudianteService> = Lazy::new(EstudianteService::new_lazy);
static GRAVEDAD_SERVICE: Lazy<GravedadService> = Lazy::new(GravedadService::new_lazy);

// --- Gestion de docentes ---

pub async fn docentes(
    req: HttpRequest,
    query: web::Query<DocenteListQuery>,
) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.list(&req, query.into_inner()).await
}

// Un docente para el formulario de edicion
pub async fn docente_detalle(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.get(&req, id.0).await
}

pub async fn docente_crear(
    req: HttpRequest,
    data: web::Json<CreateDocenteRequest>,
) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.create(&req, data.into_inner()).await
}

pub async fn docente_editar(
    req: HttpRequest,
    id: SafeIdI64,
    data: web::Json<UpdateDocenteRequest>,
) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.update(&req, id.0, data.into_inner()).await
}

pub async fn docente_eliminar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    DOCENTE_SERVICE.delete(&req, id.0).await
}

// --- Gestion de estudiantes ---

pub async fn estudiantes(
    req: HttpRequest,
    query: web::Query<EstudianteListQuery>,
) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.list(&req, query.into_inner()).await
}

// Grados y secciones para los combos del formulario
pub async fn estudiantes_catalogos(req: HttpRequest) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.catalogos(&req).await
}

// Un estudiante para el formulario de edicion
pub async fn estudiante_detalle(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.get(&req, id.0).await
}

pub async fn estudiante_crear(
    req: HttpRequest,
    data: web::Json<CreateEstudianteRequest>,
) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.create(&req, data.into_inner()).await
}

pub async fn estudiante_editar(
    req: HttpRequest,
    id: SafeIdI64,
    data: web::Json<UpdateEstudianteRequest>,
) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE
        .update(&req, id.0, data.into_inner())
        .await
}

pub async fn estudiante_eliminar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ESTUDIANTE_SERVICE.delete(&req, id.0).await
}

// --- Gestion de conductas ---

pub async fn conductas(
    req: HttpRequest,
    query: web::Query<ConductaListQuery>,
) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.list(&req, query.into_inner()).await
}

pub async fn gravedades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRAVEDAD_SERVICE.list(&req).await
}

pub async fn conducta_crear(
    req: HttpRequest,
    data: web::Json<CreateConductaRequest>,
) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.create(&req, data.into_inner()).await
}

pub async fn conducta_editar(
    req: HttpRequest,
    id: SafeIdI64,
    data: web::Json<UpdateConductaRequest>,
) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.update(&req, id.0, data.into_inner()).await
}

pub async fn conducta_eliminar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.delete(&req, id.0).await
}

pub async fn conducta_activar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.set_activa(&req, id.0, true).await
}

pub async fn conducta_desactivar(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.set_activa(&req, id.0, false).await
}

// Curaduria del catalogo
pub async fn conductas_mas_utilizadas(req: HttpRequest) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.mas_utilizadas(&req).await
}

pub async fn conductas_no_utilizadas(req: HttpRequest) -> ActixResult<HttpResponse> {
    CONDUCTA_SERVICE.no_utilizadas(&req).await
}

// Configuracion de rutas
pub fn configure_gestion_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/director/gestion")
            .wrap(middlewares::RequireRol::new(&Rol::Director))
            .wrap(middlewares::RequireSession)
            .route("/docentes", web::get().to(docentes))
            .route("/docentes/crear", web::post().to(docente_crear))
            .route("/docentes/editar/{id}", web::post().to(docente_editar))
            .route("/docentes/eliminar/{id}", web::post().to(docente_eliminar))
            .route("/docentes/{id}", web::get().to(docente_detalle))
            .route("/estudiantes", web::get().to(estudiantes))
            .route("/estudiantes/catalogos", web::get().to(estudiantes_catalogos))
            .route("/estudiantes/crear", web::post().to(estudiante_crear))
            .route("/estudiantes/editar/{id}", web::post().to(estudiante_editar))
            .route(
                "/estudiantes/eliminar/{id}",
                web::post().to(estudiante_eliminar),
            )
            .route("/estudiantes/{id}", web::get().to(estudiante_detalle))
            .route("/conductas", web::get().to(conductas))
            .route("/conductas/gravedades", web::get().to(gravedades))
            .route(
                "/conductas/mas-utilizadas",
                web::get().to(conductas_mas_utilizadas),
            )
            .route(
                "/conductas/no-utilizadas",
                web::get().to(conductas_no_utilizadas),
            )
            .route("/conductas/crear", web::post().to(conducta_crear))
            .route("/conductas/editar/{id}", web::post().to(conducta_editar))
            .route("/conductas/eliminar/{id}", web::post().to(conducta_eliminar))
            .route("/conductas/activar/{id}", web::post().to(conducta_activar))
            .route(
                "/conductas/desactivar/{id}",
                web::post().to(conducta_desactivar),
            ),
    );
}
