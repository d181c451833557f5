/*!
 * Control de acceso por rol
 *
 * Debe aplicarse despues de RequireSession; valida que el principal en las
 * extensiones tenga alguno de los roles requeridos.
 *
 * ```rust,ignore
 * web::scope("/director")
 *     .wrap(RequireRol::new(&Rol::Director))
 *     .wrap(RequireSession)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    auth::{Principal, Rol},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRol {
    required: Vec<Rol>,
}

impl RequireRol {
    /// Exige un rol concreto
    pub fn new(rol: &Rol) -> Self {
        Self {
            required: vec![*rol],
        }
    }

    /// Exige cualquiera de los roles dados
    pub fn new_any(roles: &[Rol]) -> Self {
        Self {
            required: roles.to_vec(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRol
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRolMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRolMiddleware {
            service: Rc::new(service),
            required: self.required.clone(),
        }))
    }
}

pub struct RequireRolMiddleware<S> {
    service: Rc<S>,
    required: Vec<Rol>,
}

impl<S, B> Service<ServiceRequest> for RequireRolMiddleware<S>
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
        let required = self.required.clone();

        Box::pin(async move {
            let principal = req.extensions().get::<Principal>().cloned();

            match principal {
                Some(principal) => {
                    let rol = principal.rol();
                    if required.contains(&rol) {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    } else {
                        info!(
                            "Acceso denegado para {} (rol {:?}); roles requeridos: {:?}",
                            principal.usuario(),
                            rol,
                            required
                        );
                        Ok(req.into_response(
                            create_error_response(
                                StatusCode::FORBIDDEN,
                                ErrorCode::AccessDenied,
                                "Acceso denegado",
                            )
                            .map_into_right_body(),
                        ))
                    }
                }
                None => {
                    info!(
                        "Validacion de rol sin principal en la peticion; RequireSession debe aplicarse primero"
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Autenticacion requerida",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
