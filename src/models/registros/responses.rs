use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{EstadoRegistro, RegistroConducta};
use crate::models::PaginationInfo;
use crate::models::conductas::responses::ConductaSimpleDTO;
use crate::models::estudiantes::responses::EstudianteSimpleDTO;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RegistroListResponse {
    pub items: Vec<RegistroConductaDTO>,
    pub pagination: PaginationInfo,
}

// Registro aplanado para la API: referencias reducidas en lugar del grafo
// completo de entidades
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RegistroConductaDTO {
    pub id_registro: i64,
    pub estudiante: EstudianteSimpleDTO,
    pub docente_nombre_completo: String,
    pub conducta: ConductaSimpleDTO,
    pub fecha_registro: chrono::NaiveDate,
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
    pub leido: bool,
    pub fecha_lectura: Option<chrono::NaiveDate>,
    pub estado: EstadoRegistro,
}

impl RegistroConductaDTO {
    pub fn from_registro(registro: &RegistroConducta) -> Self {
        Self {
            id_registro: registro.id,
            estudiante: EstudianteSimpleDTO::from_estudiante(&registro.estudiante),
            docente_nombre_completo: registro.docente.nombre_completo(),
            conducta: ConductaSimpleDTO::from_conducta(&registro.conducta),
            fecha_registro: registro.fecha_registro,
            acciones_tomadas: registro.acciones_tomadas.clone(),
            comentarios: registro.comentarios.clone(),
            evidencia_url: registro.evidencia_url.clone(),
            leido: registro.leido,
            fecha_lectura: registro.fecha_lectura,
            estado: registro.estado,
        }
    }
}
