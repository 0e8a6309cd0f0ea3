use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
};

/// Column values for a new credential row. Username and password are the
/// only required fields; the rest is driver metadata.
#[derive(Debug, Default, Clone)]
pub struct NewCred {
    pub username: String,
    pub password: String,
    pub enable_pass: Option<String>,
    pub netmiko_device: Option<String>,
    pub scrapli_driver: Option<String>,
    pub scrapli_transport: Option<String>,
}

pub struct CredRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, cred: NewCred) -> Result<entity::cred::Model, DbErr> {
        let cred = entity::cred::ActiveModel {
            username: ActiveValue::Set(cred.username),
            password: ActiveValue::Set(cred.password),
            enable_pass: ActiveValue::Set(cred.enable_pass),
            netmiko_device: ActiveValue::Set(cred.netmiko_device),
            scrapli_driver: ActiveValue::Set(cred.scrapli_driver),
            scrapli_transport: ActiveValue::Set(cred.scrapli_transport),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        cred.insert(self.db).await
    }

    pub async fn get_by_id(&self, cred_id: i32) -> Result<Option<entity::cred::Model>, DbErr> {
        entity::prelude::Cred::find_by_id(cred_id).one(self.db).await
    }

    /// Deletes a credential
    ///
    /// Devices still referencing the row keep the delete from going
    /// through; the foreign key is a plain restrict.
    pub async fn delete(&self, cred_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Cred::delete_by_id(cred_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use chrono::Utc;
        use sea_orm::{ActiveModelTrait, ActiveValue};

        use crate::data::cred::{CredRepository, NewCred};
        use ipam_test_utils::TestSetup;

        /// Expect success when both required columns are present
        #[tokio::test]
        async fn create_cred() {
            let setup = TestSetup::new().await.unwrap();
            let cred_repo = CredRepository::new(&setup.db);

            let result = cred_repo
                .create(NewCred {
                    username: "admin".to_string(),
                    password: "x".to_string(),
                    ..Default::default()
                })
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.username, "admin");
            assert_eq!(created.updated, None, "updated must stay unset on insert");

            let fetched = cred_repo.get_by_id(created.id).await.unwrap();
            assert_eq!(fetched, Some(created));
        }

        /// Expect `created` stamped at insertion time, not at some fixed
        /// moment before the row existed
        #[tokio::test]
        async fn create_cred_stamps_created_at_insert() {
            let setup = TestSetup::new().await.unwrap();
            let cred_repo = CredRepository::new(&setup.db);

            let before = Utc::now().naive_utc();
            let created = cred_repo
                .create(NewCred {
                    username: "admin".to_string(),
                    password: "x".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
            let after = Utc::now().naive_utc();

            assert!(
                created.created >= before && created.created <= after,
                "created {} outside insert window [{}, {}]",
                created.created,
                before,
                after
            );
        }

        /// Expect error when the schema has not been created
        #[tokio::test]
        async fn create_cred_without_schema() {
            let setup = TestSetup::without_schema().await.unwrap();
            let cred_repo = CredRepository::new(&setup.db);

            let result = cred_repo
                .create(NewCred {
                    username: "admin".to_string(),
                    password: "x".to_string(),
                    ..Default::default()
                })
                .await;

            assert!(result.is_err());
        }

        /// Expect rejection when the username column is omitted
        #[tokio::test]
        async fn create_cred_missing_username() {
            let setup = TestSetup::new().await.unwrap();

            let cred = entity::cred::ActiveModel {
                username: ActiveValue::NotSet,
                password: ActiveValue::Set("x".to_string()),
                created: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };

            let result = cred.insert(&setup.db).await;

            assert!(result.is_err());
        }

        /// Expect rejection when the password column is omitted
        #[tokio::test]
        async fn create_cred_missing_password() {
            let setup = TestSetup::new().await.unwrap();

            let cred = entity::cred::ActiveModel {
                username: ActiveValue::Set("admin".to_string()),
                password: ActiveValue::NotSet,
                created: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };

            let result = cred.insert(&setup.db).await;

            assert!(result.is_err());
        }
    }

    mod delete_tests {
        use crate::data::cred::CredRepository;
        use ipam_test_utils::{fixtures::factory, TestSetup};

        /// Expect success when deleting an unreferenced credential
        #[tokio::test]
        async fn delete_cred() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();

            let cred_repo = CredRepository::new(&setup.db);
            let result = cred_repo.delete(cred.id).await.unwrap();

            assert_eq!(result.rows_affected, 1);
        }

        /// Expect rejection when a device still references the credential
        #[tokio::test]
        async fn delete_cred_still_referenced() {
            let setup = TestSetup::new().await.unwrap();
            let cred = factory::insert_cred(&setup.db).await.unwrap();
            factory::insert_device(&setup.db, cred.id).await.unwrap();

            let cred_repo = CredRepository::new(&setup.db);
            let result = cred_repo.delete(cred.id).await;

            assert!(result.is_err());
        }
    }
}
