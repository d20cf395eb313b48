use std::sync::Arc;

use anyhow::Context;

use greenscape_api::app::{AppServices, build_app};
use greenscape_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let dotenv = dotenvy::dotenv();

    greenscape_observability::init();
    if let Err(e) = dotenv {
        tracing::debug!("no .env loaded: {e}");
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = AppServices::from_config(&config)
        .await
        .context("failed to initialise services")?;

    let app = build_app(Arc::new(services), config.cors_allow_origin.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
