//! Entidad de registros de conducta (incidentes)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registroconductas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_registro: i64,
    pub id_estudiante: i64,
    pub id_docente: i64,
    pub id_conducta: i64,
    pub fecha_registro: Date,
    pub acciones_tomadas: Option<String>,
    pub comentarios: Option<String>,
    pub evidencia_url: Option<String>,
    pub leido: bool,
    pub fecha_lectura: Option<Date>,
    pub estado: String,
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
    #[sea_orm(
        belongs_to = "super::conductas::Entity",
        from = "Column::IdConducta",
        to = "super::conductas::Column::IdConducta"
    )]
    Conducta,
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

impl Related<super::conductas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conducta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio; las relaciones se resuelven aparte
impl Model {
    pub fn into_registro(
        self,
        estudiante: crate::models::estudiantes::entities::Estudiante,
        docente: crate::models::docentes::entities::Docente,
        conducta: crate::models::conductas::entities::Conducta,
    ) -> crate::models::registros::entities::RegistroConducta {
        use crate::models::registros::entities::{EstadoRegistro, RegistroConducta};

        RegistroConducta {
            id: self.id_registro,
            estudiante,
            docente,
            conducta,
            fecha_registro: self.fecha_registro,
            acciones_tomadas: self.acciones_tomadas,
            comentarios: self.comentarios,
            evidencia_url: self.evidencia_url,
            leido: self.leido,
            fecha_lectura: self.fecha_lectura,
            estado: self
                .estado
                .parse::<EstadoRegistro>()
                .unwrap_or(EstadoRegistro::Activo),
        }
    }
}
