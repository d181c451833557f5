use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// Extractor de IDs numericos en la ruta.
///
/// Valida que el segmento `{id}` sea un entero positivo y responde 400 con
/// el sobre estandar cuando no lo es.
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();

        let parsed = raw
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                ErrorBadRequest(
                    serde_json::to_string(&ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        format!("Identificador invalido: '{raw}'"),
                    ))
                    .unwrap_or_default(),
                )
            });

        ready(parsed.map(SafeIdI64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_id_valido() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let result = SafeIdI64::from_request(&req, &mut Payload::None).await;
        assert_eq!(result.unwrap().0, 42);
    }

    #[actix_web::test]
    async fn test_id_invalido() {
        let req = TestRequest::default()
            .param("id", "abc")
            .to_http_request();
        assert!(SafeIdI64::from_request(&req, &mut Payload::None).await.is_err());

        let req = TestRequest::default().param("id", "-3").to_http_request();
        assert!(SafeIdI64::from_request(&req, &mut Payload::None).await.is_err());
    }
}
