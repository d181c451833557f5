use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Director de la institucion; no tiene entidades dependientes
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/director.ts")]
pub struct Director {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub usuario: String,
    #[serde(skip_serializing, default)] // nunca viaja en las respuestas
    #[ts(skip)]
    pub password: String,
}

impl Director {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}
