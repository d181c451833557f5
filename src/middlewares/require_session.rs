/*!
 * Middleware de sesion
 *
 * Verifica que la peticion traiga una cookie de sesion valida y que la
 * sesion exista en el cache de objetos. El principal autenticado se deja
 * en las extensiones de la peticion para los handlers siguientes.
 *
 * ## Uso
 *
 * ```rust,ignore
 * web::scope("/director")
 *     .wrap(RequireRol::new(&Rol::Director))
 *     .wrap(RequireSession)   // se ejecuta primero
 * ```
 *
 * En un handler:
 *
 * ```rust,ignore
 * if let Some(principal) = RequireSession::extract_principal(&req) {
 *     // principal.rol(), principal.id(), ...
 * }
 * ```
 *
 * ## Ciclo de vida
 *
 * La sesion nace en el login, muere con el logout o el cambio de
 * contrasena, y expira sola al cumplirse el TTL del cache.
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::models::auth::{Principal, Rol};
use crate::models::ErrorCode;
use crate::utils::session::session_cache_key;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireSession;

// Busca la sesion de la cookie en el cache y devuelve el principal
async fn extract_and_validate_session(req: &ServiceRequest) -> Result<Principal, String> {
    let config = crate::config::AppConfig::get();

    let session_id = req
        .request()
        .cookie(&config.session.cookie_name)
        .map(|c| c.value().to_string())
        .ok_or_else(|| "Sesion no iniciada".to_string())?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    let key = session_cache_key(&session_id);
    match cache.get_raw(&key).await {
        CacheResult::Found(json) => match serde_json::from_str::<Principal>(&json) {
            Ok(principal) => Ok(principal),
            Err(_) => {
                // Entrada corrupta: se descarta la sesion
                cache.remove(&key).await;
                info!("No se pudo deserializar la sesion {}", session_id);
                Err("Sesion invalida".to_string())
            }
        },
        _ => Err("Sesion invalida o expirada".to_string()),
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // Preflight CORS
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_session(&req).await {
                Ok(principal) => {
                    debug!(
                        "Sesion valida para {} ({})",
                        principal.usuario(),
                        principal.rol()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("Sesion rechazada en {}: {}", req.path(), err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &err,
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// Acceso al principal desde los handlers
impl RequireSession {
    /// Principal autenticado dejado por el middleware en las extensiones
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().cloned()
    }

    /// ID del usuario autenticado
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Principal>().map(|p| p.id())
    }

    /// Rol del usuario autenticado
    pub fn extract_rol(req: &actix_web::HttpRequest) -> Option<Rol> {
        req.extensions().get::<Principal>().map(|p| p.rol())
    }
}
