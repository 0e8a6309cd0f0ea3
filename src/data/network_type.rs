use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct NetworkTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NetworkTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        network_type: &str,
        description: Option<String>,
    ) -> Result<entity::network_type::Model, DbErr> {
        let network_type = entity::network_type::ActiveModel {
            network_type: ActiveValue::Set(network_type.to_string()),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        network_type.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::network_type::Model>, DbErr> {
        entity::prelude::NetworkType::find().all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use crate::data::network_type::NetworkTypeRepository;
        use ipam_test_utils::TestSetup;

        #[tokio::test]
        async fn create_network_type() {
            let setup = TestSetup::new().await.unwrap();

            let type_repo = NetworkTypeRepository::new(&setup.db);
            let created = type_repo
                .create("loopback", Some("router loopbacks".to_string()))
                .await
                .unwrap();

            assert_eq!(created.network_type, "loopback");

            let all = type_repo.get_all().await.unwrap();
            assert_eq!(all.len(), 1);
        }
    }
}
