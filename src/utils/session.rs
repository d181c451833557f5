use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time::Duration as CookieDuration};

use crate::config::AppConfig;
use crate::models::auth::Principal;

// Prefijo de las claves de sesion dentro del cache de objetos
const SESSION_KEY_PREFIX: &str = "session:";

/// Genera un identificador de sesion aleatorio
pub fn generar_session_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Clave del cache para un identificador de sesion
pub fn session_cache_key(session_id: &str) -> String {
    format!("{SESSION_KEY_PREFIX}{session_id}")
}

/// Serializa el principal para guardarlo en el cache de sesiones.
///
/// El hash de contrasena nunca entra a la sesion; las operaciones que lo
/// necesitan releen la entidad desde storage.
pub fn serializar_principal(principal: &Principal) -> serde_json::Result<String> {
    serde_json::to_string(principal)
}

/// Cookie de sesion con los atributos de seguridad estandar
pub fn crear_session_cookie(session_id: &str) -> Cookie<'static> {
    let config = AppConfig::get();
    Cookie::build(config.session.cookie_name.clone(), session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.is_production())
        .max_age(CookieDuration::seconds(config.session.ttl_seconds as i64))
        .finish()
}

/// Cookie vencida para cerrar sesion en el navegador
pub fn expirar_session_cookie() -> Cookie<'static> {
    let config = AppConfig::get();
    Cookie::build(config.session.cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// Lee el identificador de sesion de la cookie de la peticion
pub fn extraer_session_id(req: &HttpRequest) -> Option<String> {
    let config = AppConfig::get();
    req.cookie(&config.session.cookie_name)
        .map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_unico_y_hex() {
        let a = generar_session_id();
        let b = generar_session_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_cache_key() {
        assert_eq!(session_cache_key("abc"), "session:abc");
    }
}
