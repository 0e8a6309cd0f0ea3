use std::fmt;

use sea_orm::entity::prelude::*;

/// A classification label for networks (transit, loopback, customer, ...),
/// attached through `relate_network_network_type`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "network_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub network_type: String,
    pub description: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::network::Entity> for Entity {
    fn to() -> RelationDef {
        super::relate_network_network_type::Relation::Network.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::relate_network_network_type::Relation::NetworkType
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkType(network_type={})", self.network_type)
    }
}
