// storefront/src/state.rs
use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::pipelines;
use crate::services::{CartService, CartStore, CheckoutService};
use flow::Flows;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub catalog: Arc<CatalogStore>,
  // The one cart shared by every client.
  pub cart: CartStore,
  pub flows: Arc<Flows<AppError>>,
}

impl AppState {
  /// Wires the shared pieces together and registers the pipelines.
  pub fn build(config: AppConfig, catalog: CatalogStore) -> Self {
    let flows = Arc::new(Flows::<AppError>::new());
    pipelines::register_all_pipelines(&flows);

    Self {
      config: Arc::new(config),
      catalog: Arc::new(catalog),
      cart: CartStore::new(),
      flows,
    }
  }

  pub fn cart_service(&self) -> CartService {
    CartService::new(self.catalog.clone(), self.cart.clone())
  }

  pub fn checkout_service(&self) -> CheckoutService {
    CheckoutService::new(self.catalog.clone())
  }
}
