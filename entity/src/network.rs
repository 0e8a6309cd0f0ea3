use std::fmt;

use sea_orm::entity::prelude::*;

/// A network prefix. `network` holds the canonical CIDR rendering; the
/// address, mask, length, and wildcard columns are derived from it at
/// insert. `parent_network_id` links subnets to their covering prefix —
/// the schema itself does not guard against reference cycles.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "network")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub network: String,
    pub net_addr: Option<String>,
    pub net_mask: Option<String>,
    pub mask_length: Option<i32>,
    pub wildcard: Option<String>,
    pub parent_network_id: Option<i32>,
    pub vlan_id: Option<i32>,
    pub description: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentNetworkId",
        to = "Column::Id"
    )]
    ParentNetwork,
    #[sea_orm(
        belongs_to = "super::vlan::Entity",
        from = "Column::VlanId",
        to = "super::vlan::Column::Id"
    )]
    Vlan,
    #[sea_orm(has_many = "super::ip_address::Entity")]
    IpAddress,
}

impl Related<super::vlan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vlan.def()
    }
}

impl Related<super::ip_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IpAddress.def()
    }
}

impl Related<super::network_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::relate_network_network_type::Relation::NetworkType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::relate_network_network_type::Relation::Network
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network(network={})", self.network)
    }
}
