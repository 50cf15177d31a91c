// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::AddToCartCtxData;
use crate::services::pricing::coerce_quantity;
use crate::state::AppState;
use flow::{ContextData, PipelineResult};

// --- Request DTOs ---
// Fields stay loosely typed so the handlers can answer with the exact messages clients expect.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: Option<Value>,
  pub quantity: Option<Value>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemPayload {
  pub quantity: Option<Value>,
}

// --- Handlers ---

#[instrument(name = "handler::get_cart", skip(app_state))]
pub async fn get_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let view = app_state.cart_service().list().await;
  info!(items = view.items.len(), total = %view.total, "Cart listed.");
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, req_payload))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let AddToCartRequestPayload { product_id, quantity } = req_payload.into_inner();
  let ctx_data = ContextData::new(AddToCartCtxData::new(app_state.get_ref().clone(), product_id, quantity));

  match app_state.flows.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let cart_line = ctx_data.write().cart_line.take().ok_or_else(|| {
        AppError::Internal("Add to cart completed, but the cart line is unavailable.".to_string())
      })?;
      Ok(HttpResponse::Created().json(cart_line))
    }
    PipelineResult::Stopped => {
      warn!("Add to Cart pipeline was stopped by a handler.");
      Err(AppError::PipelineHaltedByHandler)
    }
  }
}

#[instrument(name = "handler::update_cart_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateCartItemPayload>,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let raw_quantity = req_payload
    .into_inner()
    .quantity
    .ok_or_else(|| AppError::Validation("Quantity is required".to_string()))?;
  let quantity = coerce_quantity(&raw_quantity)
    .ok_or_else(|| AppError::Validation("Quantity must be a whole number".to_string()))?;

  let item = app_state.cart_service().update(&item_id, quantity)?;
  info!(quantity = item.quantity, "Cart item updated.");
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  app_state.cart_service().remove(&path.into_inner())?;
  info!("Cart item removed.");
  Ok(HttpResponse::Ok().json(json!({ "message": "Item removed from cart" })))
}
