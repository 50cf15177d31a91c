// storefront/tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use storefront::catalog::CatalogStore;
use storefront::config::AppConfig;
use storefront::state::AppState;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

/// Fresh state on the built-in catalog with an empty cart.
pub fn fallback_state() -> AppState {
  setup_tracing();
  let config = AppConfig::from_lookup(|_| None).expect("default config");
  AppState::build(config, CatalogStore::Fallback)
}

/// Builds the test service the same way `main` builds the server.
#[macro_export]
macro_rules! spawn_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state.clone()))
        .wrap(actix_web::middleware::NormalizePath::trim())
        .configure(storefront::web::configure_app_routes),
    )
    .await
  };
}
