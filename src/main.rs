use anyhow::Result;
use habitat_seo::{config::Config, server, Site};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("habitat_seo=info".parse()?),
        )
        .init();

    info!("Starting SEO metadata service");

    let config = Config::from_env()?;
    let site = Site::from_config(&config)?;
    info!("Serving {} ({})", site.name(), site.urls().origin());

    server::serve(&config, site).await
}
