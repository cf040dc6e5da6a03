use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use catalog_scout::acquire::{DynamicAcquirer, StaticAcquirer};
use catalog_scout::web::{self, AppState};
use catalog_scout::{AppConfig, Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_scout=debug".parse()?),
        )
        .init();

    info!("Starting Catalog Scout...");

    let config = AppConfig::from_env()?;

    let static_acquirer = StaticAcquirer::new(&config.scraper)?;
    let dynamic_acquirer = DynamicAcquirer::new(config.scraper.clone());
    let orchestrator = Arc::new(Orchestrator::new(
        config.scraper.target_url.clone(),
        Box::new(static_acquirer),
        Box::new(dynamic_acquirer),
    ));

    let state = AppState {
        orchestrator,
        config: config.clone(),
    };

    web::serve(config, state).await
}
