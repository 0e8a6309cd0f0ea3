use sea_orm::entity::prelude::*;

/// Join table between `network` and `network_type`. Carries only the two
/// foreign keys plus the audit timestamps.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "relate_network_network_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub network_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub network_type_id: i32,
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
        belongs_to = "super::network_type::Entity",
        from = "Column::NetworkTypeId",
        to = "super::network_type::Column::Id"
    )]
    NetworkType,
}

impl Related<super::network::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Network.def()
    }
}

impl Related<super::network_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NetworkType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
