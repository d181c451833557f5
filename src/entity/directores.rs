//! Entidad de directores

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "director")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    #[sea_orm(unique)]
    pub usuario: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio
impl Model {
    pub fn into_director(self) -> crate::models::directores::entities::Director {
        crate::models::directores::entities::Director {
            id: self.id,
            nombres: self.nombres,
            apellidos: self.apellidos,
            usuario: self.usuario,
            password: self.password,
        }
    }
}
