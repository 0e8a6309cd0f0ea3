use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// In-memory SQLite connection with the full schema applied through the
    /// real migrations, so foreign key, NOT NULL, and unique violations are
    /// exercised against actual constraints.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;

        Ok(TestSetup { db })
    }

    /// Connection without any tables, for exercising failure paths.
    pub async fn without_schema() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }
}
