use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::directores::entities::Director;
use crate::models::docentes::entities::Docente;
use crate::models::estudiantes::entities::Estudiante;

// Rol derivado del tipo concreto autenticado
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum Rol {
    #[serde(rename = "DIRECTOR")]
    Director,
    #[serde(rename = "DOCENTE")]
    Docente,
    #[serde(rename = "ESTUDIANTE")]
    Estudiante,
}

impl Rol {
    pub const DIRECTOR: &'static str = "DIRECTOR";
    pub const DOCENTE: &'static str = "DOCENTE";
    pub const ESTUDIANTE: &'static str = "ESTUDIANTE";
}

impl<'de> Deserialize<'de> for Rol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "rol invalido: '{s}'. Roles soportados: DIRECTOR, DOCENTE, ESTUDIANTE"
            ))
        })
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rol::Director => write!(f, "{}", Rol::DIRECTOR),
            Rol::Docente => write!(f, "{}", Rol::DOCENTE),
            Rol::Estudiante => write!(f, "{}", Rol::ESTUDIANTE),
        }
    }
}

impl std::str::FromStr for Rol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Rol::DIRECTOR => Ok(Rol::Director),
            Rol::DOCENTE => Ok(Rol::Docente),
            Rol::ESTUDIANTE => Ok(Rol::Estudiante),
            _ => Err(format!("Rol invalido: {s}")),
        }
    }
}

// Usuario autenticado en sesion. Las tres tablas de usuarios son disjuntas
// y sin abstraccion comun en la base; este enum es esa abstraccion con el
// rol como discriminante.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "rol")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum Principal {
    #[serde(rename = "DIRECTOR")]
    Director(Director),
    #[serde(rename = "DOCENTE")]
    Docente(Docente),
    #[serde(rename = "ESTUDIANTE")]
    Estudiante(Estudiante),
}

impl Principal {
    pub fn rol(&self) -> Rol {
        match self {
            Principal::Director(_) => Rol::Director,
            Principal::Docente(_) => Rol::Docente,
            Principal::Estudiante(_) => Rol::Estudiante,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Principal::Director(d) => d.id,
            Principal::Docente(d) => d.id,
            Principal::Estudiante(e) => e.id,
        }
    }

    pub fn usuario(&self) -> &str {
        match self {
            Principal::Director(d) => &d.usuario,
            Principal::Docente(d) => &d.usuario,
            Principal::Estudiante(e) => &e.usuario,
        }
    }

    pub fn nombre_completo(&self) -> String {
        match self {
            Principal::Director(d) => d.nombre_completo(),
            Principal::Docente(d) => d.nombre_completo(),
            Principal::Estudiante(e) => e.nombre_completo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rol_roundtrip() {
        assert_eq!("DIRECTOR".parse::<Rol>(), Ok(Rol::Director));
        assert_eq!("DOCENTE".parse::<Rol>(), Ok(Rol::Docente));
        assert_eq!("ESTUDIANTE".parse::<Rol>(), Ok(Rol::Estudiante));
        assert!("ADMIN".parse::<Rol>().is_err());
        assert_eq!(Rol::Docente.to_string(), "DOCENTE");
    }

    #[test]
    fn test_principal_deriva_rol_y_nombre() {
        let principal = Principal::Docente(Docente {
            id: 7,
            nombres: "Luis".into(),
            apellidos: "Mendoza".into(),
            materia: Some("Matematica".into()),
            usuario: "lmendoza".into(),
            password: String::new(),
        });
        assert_eq!(principal.rol(), Rol::Docente);
        assert_eq!(principal.id(), 7);
        assert_eq!(principal.usuario(), "lmendoza");
        assert_eq!(principal.nombre_completo(), "Luis Mendoza");
    }
}
