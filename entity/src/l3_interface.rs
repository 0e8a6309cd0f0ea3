use std::fmt;

use sea_orm::entity::prelude::*;

/// A routed interface on a device. The device reference is required; the
/// address and VRF bindings are optional.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l3_interface")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ip_address_id: Option<i32>,
    pub vrf_id: Option<i32>,
    pub device_id: i32,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ip_address::Entity",
        from = "Column::IpAddressId",
        to = "super::ip_address::Column::Id"
    )]
    IpAddress,
    #[sea_orm(
        belongs_to = "super::vrf::Entity",
        from = "Column::VrfId",
        to = "super::vrf::Column::Id"
    )]
    Vrf,
    #[sea_orm(
        belongs_to = "super::device::Entity",
        from = "Column::DeviceId",
        to = "super::device::Column::Id"
    )]
    Device,
}

impl Related<super::ip_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IpAddress.def()
    }
}

impl Related<super::vrf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vrf.def()
    }
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L3Interface(name={}, device_id={})",
            self.name, self.device_id
        )
    }
}
