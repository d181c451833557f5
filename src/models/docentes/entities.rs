use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Docente que reporta incidentes y observaciones
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/docente.ts")]
pub struct Docente {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub materia: Option<String>,
    pub usuario: String,
    #[serde(skip_serializing, default)] // nunca viaja en las respuestas
    #[ts(skip)]
    pub password: String,
}

impl Docente {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}
