use std::fmt;

use sea_orm::entity::prelude::*;

/// A managed network device. Every device references the credentials used
/// to reach it; VRF membership goes through `relate_vrf_to_device`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub cred_id: i32,
    pub description: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cred::Entity",
        from = "Column::CredId",
        to = "super::cred::Column::Id"
    )]
    Cred,
    #[sea_orm(has_many = "super::ip_address::Entity")]
    IpAddress,
    #[sea_orm(has_many = "super::l3_interface::Entity")]
    L3Interface,
}

impl Related<super::cred::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cred.def()
    }
}

impl Related<super::ip_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IpAddress.def()
    }
}

impl Related<super::l3_interface::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::L3Interface.def()
    }
}

impl Related<super::vrf::Entity> for Entity {
    fn to() -> RelationDef {
        super::relate_vrf_to_device::Relation::Vrf.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::relate_vrf_to_device::Relation::Device.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Device(name={})", self.name.as_deref().unwrap_or(""))
    }
}
