//! Entidad de docentes

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "docente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub materia: Option<String>,
    #[sea_orm(unique)]
    pub usuario: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registros_conducta::Entity")]
    Registros,
    #[sea_orm(has_many = "super::observaciones::Entity")]
    Observaciones,
}

impl Related<super::registros_conducta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registros.def()
    }
}

impl Related<super::observaciones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observaciones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio
impl Model {
    pub fn into_docente(self) -> crate::models::docentes::entities::Docente {
        crate::models::docentes::entities::Docente {
            id: self.id,
            nombres: self.nombres,
            apellidos: self.apellidos,
            materia: self.materia,
            usuario: self.usuario,
            password: self.password,
        }
    }
}
