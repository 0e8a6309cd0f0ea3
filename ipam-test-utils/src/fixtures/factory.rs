//! Row factories for foreign key dependencies in tests.
//!
//! Each function inserts a row through the entity layer directly, bypassing
//! the repositories under test, and returns the persisted model.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{TEST_DEVICE_NAME, TEST_PASSWORD, TEST_USERNAME},
    error::TestError,
};

pub async fn insert_cred(db: &DatabaseConnection) -> Result<entity::cred::Model, TestError> {
    let cred = entity::cred::ActiveModel {
        username: ActiveValue::Set(TEST_USERNAME.to_string()),
        password: ActiveValue::Set(TEST_PASSWORD.to_string()),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(cred.insert(db).await?)
}

pub async fn insert_device(
    db: &DatabaseConnection,
    cred_id: i32,
) -> Result<entity::device::Model, TestError> {
    let device = entity::device::ActiveModel {
        name: ActiveValue::Set(Some(TEST_DEVICE_NAME.to_string())),
        cred_id: ActiveValue::Set(cred_id),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(device.insert(db).await?)
}

pub async fn insert_vlan(
    db: &DatabaseConnection,
    vlan_id: i32,
) -> Result<entity::vlan::Model, TestError> {
    let vlan = entity::vlan::ActiveModel {
        vlan_id: ActiveValue::Set(vlan_id),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(vlan.insert(db).await?)
}

pub async fn insert_vrf(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::vrf::Model, TestError> {
    let vrf = entity::vrf::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(vrf.insert(db).await?)
}

pub async fn insert_network(
    db: &DatabaseConnection,
    prefix: &str,
) -> Result<entity::network::Model, TestError> {
    let network = entity::network::ActiveModel {
        network: ActiveValue::Set(prefix.to_string()),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(network.insert(db).await?)
}

pub async fn insert_network_type(
    db: &DatabaseConnection,
    label: &str,
) -> Result<entity::network_type::Model, TestError> {
    let network_type = entity::network_type::ActiveModel {
        network_type: ActiveValue::Set(label.to_string()),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(network_type.insert(db).await?)
}

pub async fn insert_ip_address(
    db: &DatabaseConnection,
    addr: &str,
    network_id: Option<i32>,
    device_id: Option<i32>,
) -> Result<entity::ip_address::Model, TestError> {
    let ip_address = entity::ip_address::ActiveModel {
        ip_address: ActiveValue::Set(addr.to_string()),
        network_id: ActiveValue::Set(network_id),
        device_id: ActiveValue::Set(device_id),
        is_mgmt: ActiveValue::Set(false),
        created: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(ip_address.insert(db).await?)
}
