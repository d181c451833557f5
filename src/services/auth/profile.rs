use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireSession;
use crate::models::auth::entities::Principal;
use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::auth::responses::PerfilResponse;
use crate::models::directores::requests::UpdateDirectorRequest;
use crate::models::docentes::requests::UpdateDocenteRequest;
use crate::models::estudiantes::requests::UpdateEstudianteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::session::{extraer_session_id, serializar_principal, session_cache_key};
use crate::utils::validate::validate_nombre;

use super::AuthService;

pub async fn handle_get_profile(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match RequireSession::extract_principal(request) {
        Some(principal) => principal,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Sesion no iniciada",
            )));
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        PerfilResponse {
            rol: principal.rol(),
            principal,
        },
        "Perfil del usuario autenticado",
    )))
}

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
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

    if let Err(msg) = validate_nombre(&update_data.nombres)
        .and_then(|_| validate_nombre(&update_data.apellidos))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::Validation, msg)));
    }

    // El tipo concreto en sesion decide que tabla se actualiza
    let actualizado = match &principal {
        Principal::Director(director) => storage
            .update_director(
                director.id,
                UpdateDirectorRequest {
                    nombres: Some(update_data.nombres),
                    apellidos: Some(update_data.apellidos),
                    password: None,
                },
            )
            .await
            .map(|opt| opt.map(Principal::Director)),
        Principal::Docente(docente) => storage
            .update_docente(
                docente.id,
                UpdateDocenteRequest {
                    nombres: Some(update_data.nombres),
                    apellidos: Some(update_data.apellidos),
                    materia: update_data.materia,
                    password: None,
                },
            )
            .await
            .map(|opt| opt.map(Principal::Docente)),
        Principal::Estudiante(estudiante) => storage
            .update_estudiante(
                estudiante.id,
                UpdateEstudianteRequest {
                    nombres: Some(update_data.nombres),
                    apellidos: Some(update_data.apellidos),
                    grado: None,
                    seccion: None,
                    fecha_nacimiento: None,
                    password: None,
                },
            )
            .await
            .map(|opt| opt.map(Principal::Estudiante)),
    };

    match actualizado {
        Ok(Some(principal)) => {
            // Refrescar la copia en sesion con los datos persistidos
            if let Some(session_id) = extraer_session_id(request)
                && let Ok(serialized) = serializar_principal(&principal)
            {
                let cache = service.get_cache(request);
                let config = service.get_config();
                cache
                    .insert_raw(
                        session_cache_key(&session_id),
                        serialized,
                        config.session.ttl_seconds,
                    )
                    .await;
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PerfilResponse {
                    rol: principal.rol(),
                    principal,
                },
                "Perfil actualizado con exito",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Usuario no encontrado",
        ))),
        Err(e) => {
            tracing::error!("Error al actualizar el perfil: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Error al actualizar el perfil: {e}"),
            )))
        }
    }
}
