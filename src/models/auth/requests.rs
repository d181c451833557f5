use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub usuario: String,
    pub password: String,
}

// Edicion del perfil propio; `materia` solo aplica a docentes y `grado`/
// `seccion` solo a estudiantes, el resto de roles los ignora
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UpdateProfileRequest {
    pub nombres: String,
    pub apellidos: String,
    pub materia: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ChangePasswordRequest {
    pub password_actual: String,
    pub password_nueva: String,
    pub password_confirmacion: String,
}
