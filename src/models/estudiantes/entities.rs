use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Estudiante; cada registro y observacion lo referencia
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/estudiante.ts")]
pub struct Estudiante {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub grado: String,
    pub seccion: String,
    pub fecha_nacimiento: Option<chrono::NaiveDate>,
    pub usuario: String,
    #[serde(skip_serializing, default)] // nunca viaja en las respuestas
    #[ts(skip)]
    pub password: String,
}

impl Estudiante {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }

    pub fn grado_seccion(&self) -> String {
        format!("{}° {}", self.grado, self.seccion)
    }

    /// Edad aproximada en anios (diferencia de anio calendario)
    pub fn edad(&self, hoy: chrono::NaiveDate) -> i32 {
        use chrono::Datelike;
        match self.fecha_nacimiento {
            Some(nacimiento) => hoy.year() - nacimiento.year(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estudiante() -> Estudiante {
        Estudiante {
            id: 1,
            nombres: "Ana".into(),
            apellidos: "Quispe".into(),
            grado: "3".into(),
            seccion: "B".into(),
            fecha_nacimiento: chrono::NaiveDate::from_ymd_opt(2010, 6, 15),
            usuario: "aquispe".into(),
            password: String::new(),
        }
    }

    #[test]
    fn test_nombre_completo() {
        assert_eq!(estudiante().nombre_completo(), "Ana Quispe");
    }

    #[test]
    fn test_grado_seccion() {
        assert_eq!(estudiante().grado_seccion(), "3° B");
    }

    #[test]
    fn test_edad() {
        let hoy = chrono::NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(estudiante().edad(hoy), 16);

        let mut sin_fecha = estudiante();
        sin_fecha.fecha_nacimiento = None;
        assert_eq!(sin_fecha.edad(hoy), 0);
    }
}
