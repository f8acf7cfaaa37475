use anyhow::Result;
use grubdash::config::ServerConfig;
use grubdash::server::ServerBuilder;
use grubdash::storage::SeedData;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = match &config.seed_file {
        Some(path) => SeedData::from_yaml_file(path)?,
        None => {
            tracing::info!("no seed file configured, starting with empty collections");
            SeedData::default()
        }
    };

    ServerBuilder::from_seed(seed)
        .serve(&config.address())
        .await
}
