//! Entidad de observaciones

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observaciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_observacion: i64,
    pub id_estudiante: i64,
    pub id_docente: i64,
    pub tipo_observacion: String,
    pub descripcion: String,
    pub fecha: Date,
    pub leido: bool,
    pub fecha_lectura: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::estudiantes::Entity",
        from = "Column::IdEstudiante",
        to = "super::estudiantes::Column::Id"
    )]
    Estudiante,
    #[sea_orm(
        belongs_to = "super::docentes::Entity",
        from = "Column::IdDocente",
        to = "super::docentes::Column::Id"
    )]
    Docente,
}

impl Related<super::estudiantes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estudiante.def()
    }
}

impl Related<super::docentes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Docente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio; las relaciones se resuelven aparte
impl Model {
    pub fn into_observacion(
        self,
        estudiante: crate::models::estudiantes::entities::Estudiante,
        docente: crate::models::docentes::entities::Docente,
    ) -> crate::models::observaciones::entities::Observacion {
        crate::models::observaciones::entities::Observacion {
            id: self.id_observacion,
            estudiante,
            docente,
            tipo_observacion: self.tipo_observacion,
            descripcion: self.descripcion,
            fecha: self.fecha,
            leido: self.leido,
            fecha_lectura: self.fecha_lectura,
        }
    }
}
