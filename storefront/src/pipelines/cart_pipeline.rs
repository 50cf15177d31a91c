// storefront/src/pipelines/cart_pipeline.rs

use crate::errors::AppError;
use crate::models::ProductId;
use crate::pipelines::contexts::AddToCartCtxData;
use crate::services::pricing::coerce_quantity;
use flow::{ContextData, Pipeline, PipelineControl};
use serde_json::Value;
use tracing::{info, warn};

/// Builds the add-to-cart pipeline:
/// validate the body, resolve the product, then store the line.
pub fn add_to_cart_pipeline() -> Pipeline<AddToCartCtxData, AppError> {
  let mut p = Pipeline::<AddToCartCtxData, AppError>::new(
    "add_to_cart",
    &[
      ("validate_cart_input", false, None),
      ("resolve_product_for_cart", false, None),
      ("upsert_cart_item", false, None),
    ],
  );

  p.on_step("validate_cart_input", |ctx_data: ContextData<AddToCartCtxData>| async move {
    let (raw_product_id, raw_quantity) = {
      let guard = ctx_data.read();
      (guard.raw_product_id.clone(), guard.raw_quantity.clone())
    };

    let (Some(product_id), Some(raw_quantity)) = (raw_product_id.as_ref().and_then(product_id_from), raw_quantity)
    else {
      warn!("Add to Cart Pipeline: productId or quantity missing.");
      return Err(AppError::Validation("productId and quantity are required".to_string()));
    };

    let quantity = match coerce_quantity(&raw_quantity) {
      Some(q) if q >= 1 => q,
      _ => {
        warn!(quantity = %raw_quantity, "Add to Cart Pipeline: quantity is not a positive whole number.");
        return Err(AppError::Validation("Quantity must be a positive whole number".to_string()));
      }
    };

    info!(product_id = %product_id, quantity, "Add to Cart Pipeline: input validated.");
    {
      let mut guard = ctx_data.write();
      guard.product_id = Some(product_id);
      guard.quantity = quantity;
    }
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("resolve_product_for_cart", |ctx_data: ContextData<AddToCartCtxData>| async move {
    let (product_id, cart_service) = {
      let guard = ctx_data.read();
      (guard.product_id.clone(), guard.app_state.cart_service())
    };
    let product_id =
      product_id.ok_or_else(|| AppError::Internal("product id missing after validation".to_string()))?;

    let product = cart_service.resolve_product(&product_id).await?;
    info!(product_id = %product.id, name = %product.name, "Add to Cart Pipeline: product resolved.");
    {
      ctx_data.write().product = Some(product);
    }
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_step("upsert_cart_item", |ctx_data: ContextData<AddToCartCtxData>| async move {
    let mut guard = ctx_data.write();
    let product = guard
      .product
      .take()
      .ok_or_else(|| AppError::Internal("product missing after resolution".to_string()))?;
    let line = guard.app_state.cart_service().put(product, guard.quantity);
    info!(item_id = %line.id, quantity = line.quantity, "Add to Cart Pipeline: cart line stored.");
    guard.cart_line = Some(line);
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p
}

/// Product ids arrive as strings, but numeric ids are accepted too. Empty means absent.
fn product_id_from(raw: &Value) -> Option<ProductId> {
  let id = match raw {
    Value::String(s) => ProductId::new(s.as_str()),
    Value::Number(n) => ProductId::new(n.to_string()),
    _ => return None,
  };
  (!id.is_empty()).then_some(id)
}
