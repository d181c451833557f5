use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Principal, Rol};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub principal: Principal,
    pub rol: Rol,
    // Vida restante de la sesion en segundos
    pub expires_in: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct PerfilResponse {
    pub principal: Principal,
    pub rol: Rol,
}
