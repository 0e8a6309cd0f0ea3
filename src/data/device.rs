use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
};

pub struct DeviceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a device referencing an existing credential
    pub async fn create(
        &self,
        name: Option<String>,
        cred_id: i32,
        description: Option<String>,
    ) -> Result<entity::device::Model, DbErr> {
        let device = entity::device::ActiveModel {
            name: ActiveValue::Set(name),
            cred_id: ActiveValue::Set(cred_id),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        device.insert(self.db).await
    }

    pub async fn get_by_id(&self, device_id: i32) -> Result<Option<entity::device::Model>, DbErr> {
        entity::prelude::Device::find_by_id(device_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::device::Model>, DbErr> {
        entity::prelude::Device::find().all(self.db).await
    }

    /// Places a device in a VRF through the join table
    pub async fn assign_vrf(
        &self,
        device_id: i32,
        vrf_id: i32,
    ) -> Result<entity::relate_vrf_to_device::Model, DbErr> {
        let membership = entity::relate_vrf_to_device::ActiveModel {
            vrf_id: ActiveValue::Set(vrf_id),
            device_id: ActiveValue::Set(device_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// All VRFs a device participates in
    pub async fn get_vrfs(
        &self,
        device: &entity::device::Model,
    ) -> Result<Vec<entity::vrf::Model>, DbErr> {
        device.find_related(entity::prelude::Vrf).all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use crate::data::device::DeviceRepository;
        use ipam_test_utils::{fixtures::factory, TestSetup};

        /// Expect success when the credential exists
        #[tokio::test]
        async fn create_device() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();

            let device_repo = DeviceRepository::new(&setup.db);
            let result = device_repo
                .create(Some("r1".to_string()), cred.id, None)
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.name.as_deref(), Some("r1"));
            assert_eq!(created.cred_id, cred.id);
        }

        /// Expect rejection when the credential reference dangles
        #[tokio::test]
        async fn create_device_dangling_cred() {
            let setup = TestSetup::new().await.unwrap();

            let device_repo = DeviceRepository::new(&setup.db);
            let result = device_repo.create(Some("r1".to_string()), 42, None).await;

            assert!(result.is_err());
        }
    }

    mod get_tests {
        use crate::data::device::DeviceRepository;
        use ipam_test_utils::{fixtures::factory, TestSetup};

        #[tokio::test]
        async fn get_by_id_and_all() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            let device = factory::insert_device(&setup.db, cred.id).await.unwrap();

            let device_repo = DeviceRepository::new(&setup.db);

            let fetched = device_repo.get_by_id(device.id).await.unwrap();
            assert_eq!(fetched, Some(device));

            let all = device_repo.get_all().await.unwrap();
            assert_eq!(all.len(), 1);

            let missing = device_repo.get_by_id(42).await.unwrap();
            assert_eq!(missing, None);
        }
    }

    mod assign_vrf_tests {
        use crate::data::device::DeviceRepository;
        use ipam_test_utils::{fixtures::factory, TestSetup};

        /// Expect the join row to surface through get_vrfs
        #[tokio::test]
        async fn assign_and_list_vrfs() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            let device = factory::insert_device(&setup.db, cred.id).await.unwrap();
            let vrf = factory::insert_vrf(&setup.db, "mgmt").await.unwrap();

            let device_repo = DeviceRepository::new(&setup.db);
            let membership = device_repo.assign_vrf(device.id, vrf.id).await.unwrap();
            assert_eq!(membership.updated, None);

            let vrfs = device_repo.get_vrfs(&device).await.unwrap();

            assert_eq!(vrfs.len(), 1);
            assert_eq!(vrfs[0].name, "mgmt");
        }

        /// Expect a second identical membership row to be rejected by the
        /// composite primary key
        #[tokio::test]
        async fn assign_vrf_twice() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            let device = factory::insert_device(&setup.db, cred.id).await.unwrap();
            let vrf = factory::insert_vrf(&setup.db, "mgmt").await.unwrap();

            let device_repo = DeviceRepository::new(&setup.db);
            device_repo.assign_vrf(device.id, vrf.id).await.unwrap();
            let result = device_repo.assign_vrf(device.id, vrf.id).await;

            assert!(result.is_err());
        }
    }
}
