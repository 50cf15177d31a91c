// storefront/src/pipelines/mod.rs

//! Defines and registers the cart and checkout pipelines.

use crate::errors::AppError;
use flow::Flows;

pub mod cart_pipeline;
pub mod checkout_pipeline;
pub mod contexts;

/// Registers every application pipeline. Called once while building `AppState`.
pub fn register_all_pipelines(flows: &Flows<AppError>) {
  tracing::info!("Registering pipelines...");

  flows.register(cart_pipeline::add_to_cart_pipeline());
  flows.register(checkout_pipeline::checkout_pipeline());

  tracing::info!("All application pipelines registered.");
}
