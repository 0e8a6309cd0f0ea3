use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error};

/// Connect to the configured database and bring the schema up to date.
///
/// The returned connection is handed to each repository explicitly; no
/// global session state is kept.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    info!("database connected and schema migrated");

    Ok(db)
}
