use std::fmt;

use sea_orm::entity::prelude::*;

/// Device login credentials. Username and password are required; the
/// remaining columns carry driver metadata for whichever transport a
/// device is reached through.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cred")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub password: String,
    pub enable_pass: Option<String>,
    pub netmiko_device: Option<String>,
    pub scrapli_driver: Option<String>,
    pub scrapli_transport: Option<String>,
    pub created: DateTime,
    pub updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::device::Entity")]
    Device,
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cred(username={})", self.username)
    }
}
