//! Entidad de tipos de gravedad

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tipogravedad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_gravedad: i64,
    #[sea_orm(unique)]
    pub nombre_gravedad: String,
    pub descripcion: Option<String>,
    pub puntos: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conductas::Entity")]
    Conductas,
}

impl Related<super::conductas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conductas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio
impl Model {
    pub fn into_gravedad(self) -> crate::models::gravedades::entities::TipoGravedad {
        crate::models::gravedades::entities::TipoGravedad {
            id: self.id_gravedad,
            nombre_gravedad: self.nombre_gravedad,
            descripcion: self.descripcion,
            puntos: self.puntos,
        }
    }
}
