use ipam::{config::Config, data::network::NetworkRepository, error::Error, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let networks = NetworkRepository::new(&db).get_all().await?;

    println!("{networks:?}");
    for network in &networks {
        println!("{network}");
    }

    Ok(())
}
