use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireSession};
use crate::models::auth::Rol;
use crate::models::auth::requests::{ChangePasswordRequest, LoginRequest, UpdateProfileRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AuthService;

// Instancia global perezosa del servicio de autenticacion
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&req).await
}

pub async fn update_profile(
    req: HttpRequest,
    profile_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .update_profile(profile_data.into_inner(), &req)
        .await
}

pub async fn change_password(
    req: HttpRequest,
    password_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .change_password(password_data.into_inner(), &req)
        .await
}

// Respuesta 403 a la que redirigen los bloqueos por rol
pub async fn access_denied() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::AccessDenied,
        "No tienes permisos para acceder a este recurso",
    )))
}

// Punto de entrada al panel: redirige segun el rol en sesion
pub async fn dashboard_redirect(req: HttpRequest) -> ActixResult<HttpResponse> {
    let destino = match RequireSession::extract_rol(&req) {
        Some(Rol::Director) => "/director/dashboard",
        Some(Rol::Docente) => "/docente/dashboard",
        Some(Rol::Estudiante) => "/estudiante/dashboard",
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion no iniciada",
            )));
        }
    };

    Ok(HttpResponse::Found()
        .insert_header(("Location", destino))
        .finish())
}

// Configuracion de rutas
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/access-denied", web::get().to(access_denied))
            .service(
                web::scope("/profile")
                    .wrap(middlewares::RequireSession)
                    .route("", web::get().to(profile))
                    .route("", web::put().to(update_profile))
                    .route("/password", web::post().to(change_password)),
            ),
    );
    cfg.service(
        web::resource("/dashboard")
            .wrap(middlewares::RequireSession)
            .route(web::get().to(dashboard_redirect)),
    );
}
