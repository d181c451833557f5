use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct CreateEstudianteRequest {
    pub nombres: String,
    pub apellidos: String,
    pub grado: String,
    pub seccion: String,
    pub fecha_nacimiento: Option<chrono::NaiveDate>,
    pub usuario: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct UpdateEstudianteRequest {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub grado: Option<String>,
    pub seccion: Option<String>,
    pub fecha_nacimiento: Option<chrono::NaiveDate>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct EstudianteListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub grado: Option<String>,
    pub seccion: Option<String>,
}

impl EstudianteListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            size: self.size.unwrap_or(10),
        }
    }
}
