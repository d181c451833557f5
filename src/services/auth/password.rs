use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireSession;
use crate::models::auth::entities::Principal;
use crate::models::auth::requests::ChangePasswordRequest;
use crate::models::directores::requests::UpdateDirectorRequest;
use crate::models::docentes::requests::UpdateDocenteRequest;
use crate::models::estudiantes::requests::UpdateEstudianteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::session::{expirar_session_cookie, extraer_session_id, session_cache_key};
use crate::utils::validate::validate_password_simple;

use super::AuthService;

pub async fn handle_change_password(
    service: &AuthService,
    change_data: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let principal = match RequireSession::extract_principal(request) {
        Some(principal) => principal,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion no iniciada",
            )));
        }
    };

    if change_data.password_nueva != change_data.password_confirmacion {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "La nueva contrasena y su confirmacion no coinciden",
        )));
    }

    if let Err(msg) = validate_password_simple(&change_data.password_nueva) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    // El hash no viaja en la sesion; se relee la entidad para verificar la
    // contrasena actual
    let hash_actual = match &principal {
        Principal::Director(d) => storage
            .get_director_by_id(d.id)
            .await
            .map(|opt| opt.map(|e| e.password)),
        Principal::Docente(d) => storage
            .get_docente_by_id(d.id)
            .await
            .map(|opt| opt.map(|e| e.password)),
        Principal::Estudiante(e) => storage
            .get_estudiante_by_id(e.id)
            .await
            .map(|opt| opt.map(|e| e.password)),
    };

    let hash_actual = match hash_actual {
        Ok(Some(hash)) => hash,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Usuario no encontrado",
            )));
        }
        Err(e) => {
            tracing::error!("Error al releer el usuario: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "No se pudo cambiar la contrasena",
                )),
            );
        }
    };

    if !verify_password(&change_data.password_actual, &hash_actual) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "La contrasena actual es incorrecta",
        )));
    }

    let nuevo_hash = match hash_password(&change_data.password_nueva) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fallo el hash de contrasena: {e}"),
                )),
            );
        }
    };

    let resultado = match &principal {
        Principal::Director(d) => storage
            .update_director(
                d.id,
                UpdateDirectorRequest {
                    nombres: None,
                    apellidos: None,
                    password: Some(nuevo_hash),
                },
            )
            .await
            .map(|opt| opt.is_some()),
        Principal::Docente(d) => storage
            .update_docente(
                d.id,
                UpdateDocenteRequest {
                    nombres: None,
                    apellidos: None,
                    materia: None,
                    password: Some(nuevo_hash),
                },
            )
            .await
            .map(|opt| opt.is_some()),
        Principal::Estudiante(e) => storage
            .update_estudiante(
                e.id,
                UpdateEstudianteRequest {
                    nombres: None,
                    apellidos: None,
                    grado: None,
                    seccion: None,
                    fecha_nacimiento: None,
                    password: Some(nuevo_hash),
                },
            )
            .await
            .map(|opt| opt.is_some()),
    };

    match resultado {
        Ok(true) => {
            // Invalidar la sesion vigente tras cambiar credenciales
            if let Some(session_id) = extraer_session_id(request) {
                let cache = service.get_cache(request);
                cache.remove(&session_cache_key(&session_id)).await;
            }

            tracing::info!("Cambio de contrasena de {}", principal.usuario());

            Ok(HttpResponse::Ok()
                .cookie(expirar_session_cookie())
                .json(ApiResponse::success_empty(
                    "Contrasena actualizada con exito. Inicia sesion de nuevo",
                )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Usuario no encontrado",
        ))),
        Err(e) => {
            tracing::error!("Error al cambiar la contrasena: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "No se pudo cambiar la contrasena",
                )),
            )
        }
    }
}
