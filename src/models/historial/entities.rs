use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::registros::responses::RegistroConductaDTO;

// Elemento de la linea de tiempo: incidentes y observaciones combinados
// en una sola lista etiquetada por tipo
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "tipo")]
#[ts(export, export_to = "../frontend/src/types/generated/historial.ts")]
pub enum ElementoHistorial {
    #[serde(rename = "incidente")]
    Incidente(RegistroConductaDTO),
    #[serde(rename = "observacion")]
    Observacion(ObservacionDTO),
}

impl ElementoHistorial {
    pub fn fecha(&self) -> Option<chrono::NaiveDate> {
        match self {
            ElementoHistorial::Incidente(registro) => Some(registro.fecha_registro),
            ElementoHistorial::Observacion(observacion) => Some(observacion.fecha),
        }
    }
}

/// Orden de la linea de tiempo: fechas descendentes, entradas sin fecha al
/// final.
pub fn comparar_fechas_desc(
    a: Option<chrono::NaiveDate>,
    b: Option<chrono::NaiveDate>,
) -> Ordering {
    match (a, b) {
        (Some(fa), Some(fb)) => fb.cmp(&fa),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Combina y ordena los elementos de la linea de tiempo
pub fn ordenar_historial(mut elementos: Vec<ElementoHistorial>) -> Vec<ElementoHistorial> {
    elementos.sort_by(|a, b| comparar_fechas_desc(a.fecha(), b.fecha()));
    elementos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conductas::responses::ConductaSimpleDTO;
    use crate::models::estudiantes::responses::EstudianteSimpleDTO;
    use crate::models::registros::entities::EstadoRegistro;

    fn estudiante_dto() -> EstudianteSimpleDTO {
        EstudianteSimpleDTO {
            id: 1,
            nombres: "Ana".into(),
            apellidos: "Quispe".into(),
            grado: "3°".into(),
            seccion: "B".into(),
        }
    }

    fn incidente(dia: u32) -> ElementoHistorial {
        ElementoHistorial::Incidente(RegistroConductaDTO {
            id_registro: dia as i64,
            estudiante: estudiante_dto(),
            docente_nombre_completo: "Luis Mendoza".into(),
            conducta: ConductaSimpleDTO {
                nombre_conducta: "Tardanza".into(),
                gravedad: "leve".into(),
            },
            fecha_registro: chrono::NaiveDate::from_ymd_opt(2026, 3, dia).unwrap(),
            acciones_tomadas: None,
            comentarios: None,
            evidencia_url: None,
            leido: false,
            fecha_lectura: None,
            estado: EstadoRegistro::Activo,
        })
    }

    fn observacion(dia: u32) -> ElementoHistorial {
        ElementoHistorial::Observacion(ObservacionDTO {
            id_observacion: dia as i64,
            estudiante: estudiante_dto(),
            docente_nombre_completo: "Luis Mendoza".into(),
            tipo_observacion: "positiva".into(),
            clasificacion: crate::models::observaciones::entities::ClasificacionObservacion::Positiva,
            descripcion: "Participo en clase".into(),
            fecha: chrono::NaiveDate::from_ymd_opt(2026, 3, dia).unwrap(),
            leido: false,
            fecha_lectura: None,
        })
    }

    #[test]
    fn test_historial_mas_recientes_primero() {
        let ordenado = ordenar_historial(vec![incidente(3), observacion(20), incidente(10)]);
        let fechas: Vec<_> = ordenado.iter().map(|e| e.fecha().unwrap()).collect();
        assert_eq!(
            fechas,
            vec![
                chrono::NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
                chrono::NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
                chrono::NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_fechas_nulas_al_final() {
        let hoy = chrono::NaiveDate::from_ymd_opt(2026, 8, 5);
        assert_eq!(comparar_fechas_desc(hoy, None), Ordering::Less);
        assert_eq!(comparar_fechas_desc(None, hoy), Ordering::Greater);
        assert_eq!(comparar_fechas_desc(None, None), Ordering::Equal);
    }
}
