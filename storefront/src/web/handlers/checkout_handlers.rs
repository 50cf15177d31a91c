// storefront/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::CustomerDetails;
use crate::pipelines::contexts::CheckoutCtxData;
use crate::state::AppState;
use flow::{ContextData, PipelineResult};

#[instrument(name = "handler::checkout", skip(app_state, req_payload))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CustomerDetails>,
) -> Result<HttpResponse, AppError> {
  let ctx_data = ContextData::new(CheckoutCtxData::new(app_state.get_ref().clone(), req_payload.into_inner()));

  match app_state.flows.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let mut guard = ctx_data.write();
      let receipt = guard
        .receipt
        .take()
        .ok_or_else(|| AppError::Internal("Checkout completed, but no receipt was issued.".to_string()))?;
      info!(
        receipt_id = %receipt.id,
        total = %receipt.total,
        cleared_items = guard.cleared_items,
        "Checkout completed."
      );
      Ok(HttpResponse::Ok().json(receipt))
    }
    PipelineResult::Stopped => {
      warn!("Checkout pipeline was stopped by a handler.");
      Err(AppError::PipelineHaltedByHandler)
    }
  }
}
