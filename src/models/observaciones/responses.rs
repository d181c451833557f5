use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{ClasificacionObservacion, Observacion};
use crate::models::PaginationInfo;
use crate::models::estudiantes::responses::EstudianteSimpleDTO;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct ObservacionListResponse {
    pub items: Vec<ObservacionDTO>,
    pub pagination: PaginationInfo,
}

// Observacion aplanada para la API
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct ObservacionDTO {
    pub id_observacion: i64,
    pub estudiante: EstudianteSimpleDTO,
    pub docente_nombre_completo: String,
    pub tipo_observacion: String,
    pub clasificacion: ClasificacionObservacion,
    pub descripcion: String,
    pub fecha: chrono::NaiveDate,
    pub leido: bool,
    pub fecha_lectura: Option<chrono::NaiveDate>,
}

impl ObservacionDTO {
    pub fn from_observacion(observacion: &Observacion) -> Self {
        Self {
            id_observacion: observacion.id,
            estudiante: EstudianteSimpleDTO::from_estudiante(&observacion.estudiante),
            docente_nombre_completo: observacion.docente.nombre_completo(),
            tipo_observacion: observacion.tipo_observacion.clone(),
            clasificacion: observacion.clasificacion(),
            descripcion: observacion.descripcion.clone(),
            fecha: observacion.fecha,
            leido: observacion.leido,
            fecha_lectura: observacion.fecha_lectura,
        }
    }
}
