use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/docente.ts")]
pub struct CreateDocenteRequest {
    pub nombres: String,
    pub apellidos: String,
    pub materia: Option<String>,
    pub usuario: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/docente.ts")]
pub struct UpdateDocenteRequest {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub materia: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/docente.ts")]
pub struct DocenteListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub materia: Option<String>,
}

impl DocenteListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            size: self.size.unwrap_or(10),
        }
    }
}
