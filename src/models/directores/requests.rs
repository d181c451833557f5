use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/director.ts")]
pub struct CreateDirectorRequest {
    pub nombres: String,
    pub apellidos: String,
    pub usuario: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/director.ts")]
pub struct UpdateDirectorRequest {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub password: Option<String>,
}
