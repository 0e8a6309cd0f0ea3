use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct VrfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VrfRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        rd: Option<String>,
    ) -> Result<entity::vrf::Model, DbErr> {
        let vrf = entity::vrf::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            rd: ActiveValue::Set(rd),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        vrf.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::vrf::Model>, DbErr> {
        entity::prelude::Vrf::find().all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use crate::data::vrf::VrfRepository;
        use ipam_test_utils::TestSetup;

        #[tokio::test]
        async fn create_vrf() {
            let setup = TestSetup::new().await.unwrap();

            let vrf_repo = VrfRepository::new(&setup.db);
            let result = vrf_repo
                .create("customer-a", Some("65000:100".to_string()))
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.name, "customer-a");
            assert_eq!(created.rd.as_deref(), Some("65000:100"));

            let all = vrf_repo.get_all().await.unwrap();
            assert_eq!(all.len(), 1);
        }
    }
}
