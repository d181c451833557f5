use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse, Principal},
};
use crate::storage::Storage;
use crate::utils::password::verify_password;
use crate::utils::session::{crear_session_cookie, generar_session_id, session_cache_key};

use super::AuthService;

/// Prueba las tres tablas de usuarios en orden fijo (director, docente,
/// estudiante) y devuelve el primer principal cuyas credenciales
/// verifiquen. Un usuario homonimo con contrasena incorrecta no corta la
/// busqueda en las tablas siguientes.
pub(crate) async fn autenticar(
    storage: &Arc<dyn Storage>,
    usuario: &str,
    password: &str,
) -> crate::errors::Result<Option<Principal>> {
    if let Some(director) = storage.get_director_by_usuario(usuario).await?
        && verify_password(password, &director.password)
    {
        return Ok(Some(Principal::Director(director)));
    }

    if let Some(docente) = storage.get_docente_by_usuario(usuario).await?
        && verify_password(password, &docente.password)
    {
        return Ok(Some(Principal::Docente(docente)));
    }

    if let Some(estudiante) = storage.get_estudiante_by_usuario(usuario).await?
        && verify_password(password, &estudiante.password)
    {
        return Ok(Some(Principal::Estudiante(estudiante)));
    }

    Ok(None)
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let config = service.get_config();

    match autenticar(&storage, &login_request.usuario, &login_request.password).await {
        Ok(Some(principal)) => {
            // Crear la sesion del lado servidor
            let session_id = generar_session_id();
            let serialized = match crate::utils::session::serializar_principal(&principal) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("No se pudo serializar el principal: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "No se pudo iniciar la sesion",
                        ),
                    ));
                }
            };

            cache
                .insert_raw(
                    session_cache_key(&session_id),
                    serialized,
                    config.session.ttl_seconds,
                )
                .await;

            tracing::info!(
                "Inicio de sesion de {} como {}",
                principal.usuario(),
                principal.rol()
            );

            let response = LoginResponse {
                rol: principal.rol(),
                principal,
                expires_in: config.session.ttl_seconds,
                created_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Ok()
                .cookie(crear_session_cookie(&session_id))
                .json(ApiResponse::success(response, "Inicio de sesion exitoso")))
        }
        // Mensaje generico: no se distingue usuario inexistente de
        // contrasena incorrecta
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Credenciales invalidas",
        ))),
        Err(e) => {
            tracing::error!("Error de autenticacion: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "No se pudo procesar el inicio de sesion",
                )),
            )
        }
    }
}
