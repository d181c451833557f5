use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Codigos de negocio devueltos en el campo `code` de ApiResponse.
// El rango sigue al status HTTP asociado (401xx -> 401, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Validation = 40001,
    RelationNotFound = 40002,
    Unauthorized = 40100,
    AuthFailed = 40101,
    AccessDenied = 40300,
    NotFound = 40400,
    Conflict = 40900,
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigos_numericos() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::AuthFailed as i32, 40101);
        assert_eq!(ErrorCode::NotFound as i32, 40400);
        assert_eq!(ErrorCode::Conflict as i32, 40900);
    }
}
