use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct CreateObservacionRequest {
    pub estudiante_id: i64,
    pub docente_id: i64,
    pub tipo_observacion: String,
    pub descripcion: String,
}

// Registro de observacion desde la vista del docente; el docente sale de
// la sesion, no del cuerpo
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct RegistrarObservacionRequest {
    pub estudiante_id: i64,
    pub tipo_observacion: String,
    pub descripcion: String,
}

impl RegistrarObservacionRequest {
    pub fn into_create(self, docente_id: i64) -> CreateObservacionRequest {
        CreateObservacionRequest {
            estudiante_id: self.estudiante_id,
            docente_id,
            tipo_observacion: self.tipo_observacion,
            descripcion: self.descripcion,
        }
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct UpdateObservacionRequest {
    pub tipo_observacion: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct ObservacionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub estudiante_id: Option<i64>,
    pub docente_id: Option<i64>,
    pub tipo: Option<String>,
    pub fecha: Option<chrono::NaiveDate>,
    pub fecha_inicio: Option<chrono::NaiveDate>,
    pub fecha_fin: Option<chrono::NaiveDate>,
    pub leido: Option<bool>,
}

impl ObservacionListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            size: self.size.unwrap_or(10),
        }
    }
}
