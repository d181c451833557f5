use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Estudiante;
use crate::models::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct EstudianteListResponse {
    pub items: Vec<Estudiante>,
    pub pagination: PaginationInfo,
}

// Representacion reducida para anidar en otros DTOs
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct EstudianteSimpleDTO {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub grado: String,
    pub seccion: String,
}

impl EstudianteSimpleDTO {
    pub fn from_estudiante(estudiante: &Estudiante) -> Self {
        Self {
            id: estudiante.id,
            nombres: estudiante.nombres.clone(),
            apellidos: estudiante.apellidos.clone(),
            grado: format!("{}°", estudiante.grado),
            seccion: estudiante.seccion.clone(),
        }
    }
}
