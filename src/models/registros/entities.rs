use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::conductas::entities::Conducta;
use crate::models::docentes::entities::Docente;
use crate::models::estudiantes::entities::Estudiante;

// Estado de un registro de conducta. Solo existen dos transiciones:
// ACTIVO -> RESUELTO (accion del director) y no-leido -> leido.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub enum EstadoRegistro {
    Activo,
    Resuelto,
}

impl EstadoRegistro {
    pub const ACTIVO: &'static str = "ACTIVO";
    pub const RESUELTO: &'static str = "RESUELTO";
}

impl<'de> Deserialize<'de> for EstadoRegistro {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "estado invalido: '{s}'. Estados soportados: ACTIVO, RESUELTO"
            ))
        })
    }
}

impl std::fmt::Display for EstadoRegistro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoRegistro::Activo => write!(f, "{}", EstadoRegistro::ACTIVO),
            EstadoRegistro::Resuelto => write!(f, "{}", EstadoRegistro::RESUELTO),
        }
    }
}

impl std::str::FromStr for EstadoRegistro {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EstadoRegistro::ACTIVO => Ok(EstadoRegistro::Activo),
            EstadoRegistro::RESUELTO => Ok(EstadoRegistro::Resuelto),
            _ => Err(format!("Estado de registro invalido: {s}")),
        }
    }
}

// Incidente reportado: liga estudiante, docente y conducta en una fecha
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/registro.ts")]
pub struct RegistroConducta {
    pub id: i64,
    pub estudiante: Estudiante,
    pub docente: Docente,
    pub conducta: Conducta,
    pub fecha_registro: chrono::NaiveDate,
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
    pub leido: bool,
    pub fecha_lectura: Option<chrono::NaiveDate>,
    pub estado: EstadoRegistro,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_roundtrip() {
        assert_eq!("ACTIVO".parse::<EstadoRegistro>(), Ok(EstadoRegistro::Activo));
        assert_eq!(
            "RESUELTO".parse::<EstadoRegistro>(),
            Ok(EstadoRegistro::Resuelto)
        );
        assert_eq!(EstadoRegistro::Activo.to_string(), "ACTIVO");
        assert_eq!(EstadoRegistro::Resuelto.to_string(), "RESUELTO");
    }

    #[test]
    fn test_estado_desconocido_falla() {
        assert!("PENDIENTE".parse::<EstadoRegistro>().is_err());
        assert!("activo".parse::<EstadoRegistro>().is_err());
    }
}
