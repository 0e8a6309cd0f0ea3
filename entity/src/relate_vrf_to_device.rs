use sea_orm::entity::prelude::*;

/// Join table between `vrf` and `device`. Carries only the two foreign
/// keys plus the audit timestamps.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "relate_vrf_to_device")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vrf_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub device_id: i32,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
