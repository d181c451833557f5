use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::session::{expirar_session_cookie, extraer_session_id, session_cache_key};

use super::AuthService;

pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    // Si hay cookie, descartar la sesion del cache
    if let Some(session_id) = extraer_session_id(request) {
        cache.remove(&session_cache_key(&session_id)).await;
    }

    Ok(HttpResponse::Ok()
        .cookie(expirar_session_cookie())
        .json(ApiResponse::success_empty("Sesion cerrada exitosamente")))
}
