// storefront/src/pipelines/checkout_pipeline.rs

use crate::errors::AppError;
use crate::pipelines::contexts::CheckoutCtxData;
use crate::services::CheckoutService;
use flow::{ContextData, Pipeline, PipelineControl};
use tracing::{info, warn};

/// Builds the checkout pipeline. The cart is cleared only after a receipt exists,
/// so any earlier failure leaves it untouched.
pub fn checkout_pipeline() -> Pipeline<CheckoutCtxData, AppError> {
  let mut p = Pipeline::<CheckoutCtxData, AppError>::new(
    "checkout",
    &[
      ("validate_customer_details", false, None),
      ("snapshot_cart", false, None),
      ("price_line_items", false, None),
      ("issue_receipt", false, None),
      ("clear_cart", false, None),
    ],
  );

  p.on_step("validate_customer_details", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let guard = ctx_data.read();
    if let Err(e) = CheckoutService::validate(&guard.customer) {
      warn!(reason = %e, "Checkout Pipeline: customer details rejected.");
      return Err(e);
    }
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("snapshot_cart", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let mut guard = ctx_data.write();
    let items = guard.app_state.cart.items();
    CheckoutService::ensure_not_empty(&items)?;
    info!(num_items = items.len(), "Checkout Pipeline: cart snapshot taken.");
    guard.cart_snapshot = items;
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("price_line_items", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let (snapshot, checkout_service) = {
      let guard = ctx_data.read();
      (guard.cart_snapshot.clone(), guard.app_state.checkout_service())
    };

    let (lines, total) = checkout_service.price_lines(&snapshot).await?;
    info!(priced_lines = lines.len(), %total, "Checkout Pipeline: line items priced.");
    {
      let mut guard = ctx_data.write();
      guard.receipt_lines = lines;
      guard.total = total;
    }
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("issue_receipt", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let mut guard = ctx_data.write();
    let lines = std::mem::take(&mut guard.receipt_lines);
    let receipt = CheckoutService::issue_receipt(&guard.customer, lines, guard.total);
    info!(receipt_id = %receipt.id, total = %receipt.total, "Checkout Pipeline: receipt issued.");
    guard.receipt = Some(receipt);
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("clear_cart", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let mut guard = ctx_data.write();
    let cleared = guard.app_state.cart.clear();
    info!(cleared, "Checkout Pipeline: cart cleared.");
    guard.cleared_items = cleared;
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p
}
