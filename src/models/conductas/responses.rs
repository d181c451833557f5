use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Conducta;

// Representacion reducida para anidar en otros DTOs
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct ConductaSimpleDTO {
    pub nombre_conducta: String,
    pub gravedad: String,
}

impl ConductaSimpleDTO {
    pub fn from_conducta(conducta: &Conducta) -> Self {
        Self {
            nombre_conducta: conducta.nombre_conducta.clone(),
            gravedad: conducta.gravedad.nombre_gravedad.clone(),
        }
    }
}

// Conducta con su numero de usos, para la curaduria del catalogo
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct ConductaUsoDTO {
    pub conducta: Conducta,
    pub total_usos: i64,
}
