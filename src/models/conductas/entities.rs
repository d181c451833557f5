use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::gravedades::entities::TipoGravedad;

// Regla de conducta del catalogo, ligada a exactamente un nivel de gravedad.
// `activo` controla la visibilidad sin borrar el historial de registros.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conducta.ts")]
pub struct Conducta {
    pub id: i64,
    pub nombre_conducta: String,
    pub descripcion: String,
    pub gravedad: TipoGravedad,
    pub activo: bool,
}

impl Conducta {
    pub fn nombre_completo(&self) -> String {
        format!("{} ({})", self.nombre_conducta, self.gravedad.nombre_gravedad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombre_completo_incluye_gravedad() {
        let conducta = Conducta {
            id: 1,
            nombre_conducta: "Tardanza".into(),
            descripcion: "Llegar tarde a clase".into(),
            gravedad: TipoGravedad {
                id: 1,
                nombre_gravedad: "leve".into(),
                descripcion: None,
                puntos: Some(1),
            },
            activo: true,
        };
        assert_eq!(conducta.nombre_completo(), "Tardanza (leve)");
    }
}
