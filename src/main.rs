use std::net::SocketAddr;

use anyhow::{Context, Result};
use ekwip_locale::{config::Config, i18n::Locale, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ekwip_locale=info".parse()?),
        )
        .init();

    info!("Starting Ekwip locale router");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Site URL {}, default locale '{}', {} excluded prefixes",
        config.site_url,
        Locale::DEFAULT,
        config.excluded_prefixes.len()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = server::create_router(server::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
