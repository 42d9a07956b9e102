use anyhow::Result;
use tracing_subscriber::EnvFilter;

use yatrafare::FareConfig;
use yatrafare::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = FareConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(version = yatrafare::VERSION, "starting fare estimator");

    web::run(&config).await
}
