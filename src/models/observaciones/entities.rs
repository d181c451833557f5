use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::docentes::entities::Docente;
use crate::models::estudiantes::entities::Estudiante;

// Clasificacion de una observacion. El tipo se guarda como texto libre y
// se clasifica al consultar; cualquier valor fuera de los dos canonicos
// cae en `Otra`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub enum ClasificacionObservacion {
    Positiva,
    Negativa,
    Otra,
}

impl ClasificacionObservacion {
    pub fn clasificar(tipo: &str) -> Self {
        if tipo.eq_ignore_ascii_case("positiva") {
            ClasificacionObservacion::Positiva
        } else if tipo.eq_ignore_ascii_case("negativa") {
            ClasificacionObservacion::Negativa
        } else {
            ClasificacionObservacion::Otra
        }
    }
}

// Nota libre sobre un estudiante, separada de los incidentes formales
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/observacion.ts")]
pub struct Observacion {
    pub id: i64,
    pub estudiante: Estudiante,
    pub docente: Docente,
    pub tipo_observacion: String,
    pub descripcion: String,
    pub fecha: chrono::NaiveDate,
    pub leido: bool,
    pub fecha_lectura: Option<chrono::NaiveDate>,
}

impl Observacion {
    pub fn clasificacion(&self) -> ClasificacionObservacion {
        ClasificacionObservacion::clasificar(&self.tipo_observacion)
    }

    pub fn is_positiva(&self) -> bool {
        self.clasificacion() == ClasificacionObservacion::Positiva
    }

    pub fn is_negativa(&self) -> bool {
        self.clasificacion() == ClasificacionObservacion::Negativa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_canonicos() {
        assert_eq!(
            ClasificacionObservacion::clasificar("positiva"),
            ClasificacionObservacion::Positiva
        );
        assert_eq!(
            ClasificacionObservacion::clasificar("NEGATIVA"),
            ClasificacionObservacion::Negativa
        );
        assert_eq!(
            ClasificacionObservacion::clasificar("Positiva"),
            ClasificacionObservacion::Positiva
        );
    }

    #[test]
    fn test_clasificar_texto_libre_cae_en_otra() {
        assert_eq!(
            ClasificacionObservacion::clasificar("neutra"),
            ClasificacionObservacion::Otra
        );
        assert_eq!(
            ClasificacionObservacion::clasificar("seguimiento"),
            ClasificacionObservacion::Otra
        );
        assert_eq!(
            ClasificacionObservacion::clasificar(""),
            ClasificacionObservacion::Otra
        );
    }
}
