use std::net::IpAddr;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct IpAddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IpAddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an address, optionally bound to a network and a device.
    /// A device may not hold the same address twice.
    pub async fn create(
        &self,
        addr: IpAddr,
        network_id: Option<i32>,
        device_id: Option<i32>,
        is_mgmt: bool,
        description: Option<String>,
    ) -> Result<entity::ip_address::Model, DbErr> {
        let ip_address = entity::ip_address::ActiveModel {
            ip_address: ActiveValue::Set(addr.to_string()),
            network_id: ActiveValue::Set(network_id),
            device_id: ActiveValue::Set(device_id),
            is_mgmt: ActiveValue::Set(is_mgmt),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        ip_address.insert(self.db).await
    }

    pub async fn get_by_device(
        &self,
        device_id: i32,
    ) -> Result<Vec<entity::ip_address::Model>, DbErr> {
        entity::prelude::IpAddress::find()
            .filter(entity::ip_address::Column::DeviceId.eq(device_id))
            .all(self.db)
            .await
    }
}
