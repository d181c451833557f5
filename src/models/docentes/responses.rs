use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Docente;
use crate::models::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/docente.ts")]
pub struct DocenteListResponse {
    pub items: Vec<Docente>,
    pub pagination: PaginationInfo,
}
