use serde::Deserialize;
use ts_rs::TS;

use super::entities::EstadoRegistro;
use crate::models::common::pagination::PaginationQuery;

// Peticion de registro de incidente; los tres IDs deben resolverse o la
// operacion falla sin persistir nada
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct CreateRegistroRequest {
    pub estudiante_id: i64,
    pub docente_id: i64,
    pub conducta_id: i64,
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct UpdateRegistroRequest {
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
    pub estado: Option<EstadoRegistro>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RegistroListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub estudiante_id: Option<i64>,
    pub docente_id: Option<i64>,
    pub conducta_id: Option<i64>,
    pub fecha: Option<chrono::NaiveDate>,
    pub fecha_inicio: Option<chrono::NaiveDate>,
    pub fecha_fin: Option<chrono::NaiveDate>,
    pub leido: Option<bool>,
    pub estado: Option<EstadoRegistro>,
}

impl RegistroListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            size: self.size.unwrap_or(10),
        }
    }
}

// Registro de falta desde la vista del docente; el docente sale de la
// sesion, no del cuerpo
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RegistrarFaltaRequest {
    pub estudiante_id: i64,
    pub conducta_id: i64,
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
}

impl RegistrarFaltaRequest {
    pub fn into_create(self, docente_id: i64) -> CreateRegistroRequest {
        CreateRegistroRequest {
            estudiante_id: self.estudiante_id,
            docente_id,
            conducta_id: self.conducta_id,
            acciones_tomadas: self.acciones_tomadas,
            comentarios: self.comentarios,
            evidencia_url: self.evidencia_url,
        }
    }
}

// Filtros de fecha de la API REST
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct FechaQuery {
    pub fecha: chrono::NaiveDate,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RangoFechasQuery {
    pub inicio: chrono::NaiveDate,
    pub fin: chrono::NaiveDate,
}
