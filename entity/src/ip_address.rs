use std::fmt;

use sea_orm::entity::prelude::*;

/// A single address, optionally pinned to the network it belongs to and
/// the device holding it. A device may not register the same address
/// twice: `(ip_address, device_id)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ip_address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ip_address: String,
    pub network_id: Option<i32>,
    pub device_id: Option<i32>,
    pub is_mgmt: bool,
    pub description: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::network::Entity",
        from = "Column::NetworkId",
        to = "super::network::Column::Id"
    )]
    Network,
    #[sea_orm(
        belongs_to = "super::device::Entity",
        from = "Column::DeviceId",
        to = "super::device::Column::Id"
    )]
    Device,
    #[sea_orm(has_many = "super::l3_interface::Entity")]
    L3Interface,
}

impl Related<super::network::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Network.def()
    }
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl Related<super::l3_interface::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::L3Interface.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPAddress(ip_address={})", self.ip_address)
    }
}
