use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Nivel de gravedad de una conducta, con puntaje asociado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gravedad.ts")]
pub struct TipoGravedad {
    pub id: i64,
    pub nombre_gravedad: String,
    pub descripcion: Option<String>,
    pub puntos: Option<i32>,
}

impl TipoGravedad {
    pub fn is_leve(&self) -> bool {
        self.nombre_gravedad.eq_ignore_ascii_case("leve")
    }

    pub fn is_grave(&self) -> bool {
        self.nombre_gravedad.eq_ignore_ascii_case("grave")
    }

    pub fn is_muy_grave(&self) -> bool {
        self.nombre_gravedad.eq_ignore_ascii_case("muy grave")
    }
}

/// Los tres niveles canonicos sembrados al arrancar sobre tabla vacia
pub const GRAVEDADES_INICIALES: [(&str, &str, i32); 3] = [
    (
        "leve",
        "Faltas menores que no afectan gravemente la convivencia",
        1,
    ),
    (
        "grave",
        "Faltas que afectan significativamente la convivencia escolar",
        3,
    ),
    (
        "muy grave",
        "Faltas muy graves que pueden conllevar a sanciones severas",
        5,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificadores_ignoran_mayusculas() {
        let g = TipoGravedad {
            id: 1,
            nombre_gravedad: "Muy Grave".into(),
            descripcion: None,
            puntos: Some(5),
        };
        assert!(g.is_muy_grave());
        assert!(!g.is_leve());
        assert!(!g.is_grave());
    }

    #[test]
    fn test_semilla_canonica() {
        assert_eq!(GRAVEDADES_INICIALES.len(), 3);
        assert_eq!(GRAVEDADES_INICIALES[0].0, "leve");
        assert_eq!(GRAVEDADES_INICIALES[0].2, 1);
        assert_eq!(GRAVEDADES_INICIALES[1].0, "grave");
        assert_eq!(GRAVEDADES_INICIALES[1].2, 3);
        assert_eq!(GRAVEDADES_INICIALES[2].0, "muy grave");
        assert_eq!(GRAVEDADES_INICIALES[2].2, 5);
    }
}
