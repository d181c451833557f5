use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct CreateConductaRequest {
    pub nombre_conducta: String,
    pub descripcion: String,
    pub id_gravedad: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct UpdateConductaRequest {
    pub nombre_conducta: Option<String>,
    pub descripcion: Option<String>,
    pub id_gravedad: Option<i64>,
    pub activo: Option<bool>,
}

// El catalogo es pequeno; se lista completo con filtros opcionales
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct ConductaListQuery {
    pub activo: Option<bool>,
    pub id_gravedad: Option<i64>,
    pub search: Option<String>,
}
