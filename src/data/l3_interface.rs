use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct L3InterfaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> L3InterfaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a routed interface on an existing device
    pub async fn create(
        &self,
        name: &str,
        device_id: i32,
        ip_address_id: Option<i32>,
        vrf_id: Option<i32>,
    ) -> Result<entity::l3_interface::Model, DbErr> {
        let interface = entity::l3_interface::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            device_id: ActiveValue::Set(device_id),
            ip_address_id: ActiveValue::Set(ip_address_id),
            vrf_id: ActiveValue::Set(vrf_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        interface.insert(self.db).await
    }

    pub async fn get_by_device(
        &self,
        device_id: i32,
    ) -> Result<Vec<entity::l3_interface::Model>, DbErr> {
        entity::prelude::L3Interface::find()
            .filter(entity::l3_interface::Column::DeviceId.eq(device_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use crate::data::l3_interface::L3InterfaceRepository;
        use ipam_test_utils::{fixtures::factory, TestSetup};

        /// Expect success with only the device bound
        #[tokio::test]
        async fn create_interface() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            let device = factory::insert_device(&setup.db, cred.id).await.unwrap();

            let interface_repo = L3InterfaceRepository::new(&setup.db);
            let result = interface_repo
                .create("GigabitEthernet0/0", device.id, None, None)
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.name, "GigabitEthernet0/0");
            assert_eq!(created.ip_address_id, None);
            assert_eq!(created.vrf_id, None);
        }

        /// Expect rejection when the device reference dangles
        #[tokio::test]
        async fn create_interface_dangling_device() {
            let setup = TestSetup::new().await.unwrap();

            let interface_repo = L3InterfaceRepository::new(&setup.db);
            let result = interface_repo
                .create("GigabitEthernet0/0", 42, None, None)
                .await;

            assert!(result.is_err());
        }

        /// Expect success with address and VRF bound
        #[tokio::test]
        async fn create_interface_with_bindings() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            let device = factory::insert_device(&setup.db, cred.id).await.unwrap();
            let vrf = factory::insert_vrf(&setup.db, "mgmt").await.unwrap();
            let address = factory::insert_ip_address(&setup.db, "10.0.0.1", None, Some(device.id))
                .await
                .unwrap();

            let interface_repo = L3InterfaceRepository::new(&setup.db);
            let created = interface_repo
                .create("Loopback0", device.id, Some(address.id), Some(vrf.id))
                .await
                .unwrap();

            assert_eq!(created.ip_address_id, Some(address.id));
            assert_eq!(created.vrf_id, Some(vrf.id));

            let interfaces = interface_repo.get_by_device(device.id).await.unwrap();
            assert_eq!(interfaces.len(), 1);
        }
    }
}
