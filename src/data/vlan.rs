use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct VlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        vlan_id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<entity::vlan::Model, DbErr> {
        let vlan = entity::vlan::ActiveModel {
            vlan_id: ActiveValue::Set(vlan_id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        vlan.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vlan::Model>, DbErr> {
        entity::prelude::Vlan::find_by_id(id).one(self.db).await
    }
}
