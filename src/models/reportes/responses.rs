use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::conductas::entities::Conducta;
use crate::models::conductas::responses::ConductaUsoDTO;
use crate::models::docentes::entities::Docente;
use crate::models::estudiantes::entities::Estudiante;
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::registros::entities::RegistroConducta;
use crate::models::registros::responses::RegistroConductaDTO;

// Conteos agrupados que entrega la capa de persistencia
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ConteoPorGravedad {
    pub gravedad: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ConteoPorGrado {
    pub grado: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ConteoPorMes {
    pub anio: i32,
    pub mes: u32,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ConteoPorTipo {
    pub tipo: String,
    pub total: i64,
}

// Totales generales del panel del director
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ResumenGeneral {
    pub total_estudiantes: i64,
    pub total_docentes: i64,
    pub total_incidentes: i64,
    pub total_observaciones: i64,
    pub promedio_incidentes_por_estudiante: f64,
}

/// Incidentes por estudiante; 0.0 cuando no hay estudiantes
pub fn promedio_incidentes(total_incidentes: i64, total_estudiantes: i64) -> f64 {
    if total_estudiantes == 0 {
        0.0
    } else {
        total_incidentes as f64 / total_estudiantes as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct ReporteGeneralResponse {
    pub resumen: ResumenGeneral,
    pub incidentes_por_gravedad: Vec<ConteoPorGravedad>,
    pub incidentes_por_grado: Vec<ConteoPorGrado>,
    pub incidentes_por_mes: Vec<ConteoPorMes>,
    pub observaciones_por_tipo: Vec<ConteoPorTipo>,
    pub conductas_mas_utilizadas: Vec<ConductaUsoDTO>,
    pub conductas_no_utilizadas: Vec<Conducta>,
}

// Paneles por rol
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct DashboardDirectorResponse {
    pub resumen: ResumenGeneral,
    pub total_no_leidos: i64,
    pub incidentes_recientes: Vec<RegistroConductaDTO>,
    pub observaciones_recientes: Vec<ObservacionDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct DashboardDocenteResponse {
    pub docente: Docente,
    pub total_incidentes: i64,
    pub total_observaciones: i64,
    pub incidentes_recientes: Vec<RegistroConductaDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct DashboardEstudianteResponse {
    pub estudiante: Estudiante,
    pub total_faltas: i64,
    pub total_observaciones: i64,
    pub faltas_recientes: Vec<RegistroConductaDTO>,
}

// Registros del estudiante agrupados por nivel de gravedad
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reporte.ts")]
pub struct MisConductasResponse {
    pub leves: Vec<RegistroConductaDTO>,
    pub graves: Vec<RegistroConductaDTO>,
    pub muy_graves: Vec<RegistroConductaDTO>,
}

impl MisConductasResponse {
    /// Agrupa por el nombre del nivel de gravedad, sin distinguir
    /// mayusculas
    pub fn agrupar(registros: &[RegistroConducta]) -> Self {
        let mut respuesta = Self {
            leves: Vec::new(),
            graves: Vec::new(),
            muy_graves: Vec::new(),
        };

        for registro in registros {
            let dto = RegistroConductaDTO::from_registro(registro);
            let gravedad = &registro.conducta.gravedad;
            if gravedad.is_leve() {
                respuesta.leves.push(dto);
            } else if gravedad.is_grave() {
                respuesta.graves.push(dto);
            } else if gravedad.is_muy_grave() {
                respuesta.muy_graves.push(dto);
            }
        }

        respuesta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gravedades::entities::TipoGravedad;
    use crate::models::registros::entities::EstadoRegistro;

    #[test]
    fn test_promedio_protege_division_por_cero() {
        assert_eq!(promedio_incidentes(10, 0), 0.0);
        assert_eq!(promedio_incidentes(10, 4), 2.5);
        assert_eq!(promedio_incidentes(0, 7), 0.0);
    }

    fn registro_con_gravedad(nombre: &str) -> RegistroConducta {
        RegistroConducta {
            id: 1,
            estudiante: Estudiante {
                id: 1,
                nombres: "Ana".into(),
                apellidos: "Quispe".into(),
                grado: "3".into(),
                seccion: "B".into(),
                fecha_nacimiento: None,
                usuario: "aquispe".into(),
                password: String::new(),
            },
            docente: Docente {
                id: 2,
                nombres: "Luis".into(),
                apellidos: "Mendoza".into(),
                materia: None,
                usuario: "lmendoza".into(),
                password: String::new(),
            },
            conducta: Conducta {
                id: 3,
                nombre_conducta: "Tardanza".into(),
                descripcion: "Llegar tarde".into(),
                gravedad: TipoGravedad {
                    id: 4,
                    nombre_gravedad: nombre.into(),
                    descripcion: None,
                    puntos: None,
                },
                activo: true,
            },
            fecha_registro: chrono::NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            acciones_tomadas: None,
            comentarios: None,
            evidencia_url: None,
            leido: false,
            fecha_lectura: None,
            estado: EstadoRegistro::Activo,
        }
    }

    #[test]
    fn test_agrupar_por_gravedad() {
        let registros = vec![
            registro_con_gravedad("leve"),
            registro_con_gravedad("grave"),
            registro_con_gravedad("Leve"),
        ];
        let buckets = MisConductasResponse::agrupar(&registros);
        assert_eq!(buckets.leves.len(), 2);
        assert_eq!(buckets.graves.len(), 1);
        assert_eq!(buckets.muy_graves.len(), 0);
    }
}
