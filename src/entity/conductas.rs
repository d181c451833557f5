//! Entidad de conductas (reglas de comportamiento)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "conducta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_conducta: i64,
    pub nombre_conducta: String,
    pub descripcion: String,
    pub id_gravedad: i64,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tipos_gravedad::Entity",
        from = "Column::IdGravedad",
        to = "super::tipos_gravedad::Column::IdGravedad"
    )]
    Gravedad,
    #[sea_orm(has_many = "super::registros_conducta::Entity")]
    Registros,
}

impl Related<super::tipos_gravedad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gravedad.def()
    }
}

impl Related<super::registros_conducta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registros.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion al modelo de negocio; la gravedad se resuelve aparte
impl Model {
    pub fn into_conducta(
        self,
        gravedad: crate::models::gravedades::entities::TipoGravedad,
    ) -> crate::models::conductas::entities::Conducta {
        crate::models::conductas::entities::Conducta {
            id: self.id_conducta,
            nombre_conducta: self.nombre_conducta,
            descripcion: self.descripcion,
            gravedad,
            activo: self.activo,
        }
    }
}
