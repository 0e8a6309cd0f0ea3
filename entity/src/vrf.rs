use std::fmt;

use sea_orm::entity::prelude::*;

/// A virtual routing and forwarding instance, identified by name with an
/// optional route distinguisher.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vrf")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rd: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::l3_interface::Entity")]
    L3Interface,
}

impl Related<super::l3_interface::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::L3Interface.def()
    }
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        super::relate_vrf_to_device::Relation::Device.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::relate_vrf_to_device::Relation::Vrf.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VRF(name={})", self.name)
    }
}
