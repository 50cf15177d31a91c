// storefront/src/main.rs

use storefront::catalog::CatalogStore;
use storefront::config::AppConfig;
use storefront::state::AppState;
use storefront::web;

use actix_web::{middleware, web::Data, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    anyhow::anyhow!(e)
  })?;

  let catalog = CatalogStore::connect(&app_config).await;
  let server_address = app_config.bind_address();
  let app_state = AppState::build(app_config, catalog);
  tracing::info!(catalog = app_state.catalog.backend(), "Application state ready.");

  tracing::info!("Attempting to bind server to {}...", server_address);
  HttpServer::new(move || {
    App::new()
      .app_data(Data::new(app_state.clone()))
      .wrap(middleware::NormalizePath::trim())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("server terminated with an error")?;

  Ok(())
}
