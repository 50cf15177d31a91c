// storefront/src/pipelines/contexts.rs

//! Context structs the pipelines run over. Handlers receive them wrapped in `flow::ContextData`.

use crate::models::{CartItem, CartLine, CustomerDetails, Product, ProductId, Receipt, ReceiptLine};
use crate::state::AppState;
use rust_decimal::Decimal;
use serde_json::Value;

#[derive(Clone)]
pub struct AddToCartCtxData {
  pub app_state: AppState,
  // As received; validated by the first step.
  pub raw_product_id: Option<Value>,
  pub raw_quantity: Option<Value>,

  pub product_id: Option<ProductId>,
  pub quantity: i64,
  pub product: Option<Product>,
  pub cart_line: Option<CartLine>,
}

impl AddToCartCtxData {
  pub fn new(app_state: AppState, raw_product_id: Option<Value>, raw_quantity: Option<Value>) -> Self {
    Self {
      app_state,
      raw_product_id,
      raw_quantity,
      product_id: None,
      quantity: 0,
      product: None,
      cart_line: None,
    }
  }
}

#[derive(Clone)]
pub struct CheckoutCtxData {
  pub app_state: AppState,
  pub customer: CustomerDetails,
  pub cart_snapshot: Vec<CartItem>,
  pub receipt_lines: Vec<ReceiptLine>,
  pub total: Decimal,
  pub receipt: Option<Receipt>,
  pub cleared_items: usize,
}

impl CheckoutCtxData {
  pub fn new(app_state: AppState, customer: CustomerDetails) -> Self {
    Self {
      app_state,
      customer,
      cart_snapshot: Vec::new(),
      receipt_lines: Vec::new(),
      total: Decimal::ZERO,
      receipt: None,
      cleared_items: 0,
    }
  }
}
