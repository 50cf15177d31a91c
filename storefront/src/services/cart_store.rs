// storefront/src/services/cart_store.rs

//! The process-wide cart. Volatile; lost on restart.

use crate::models::{CartItem, ProductId};
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Shared handle to the single cart every client sees.
///
/// Each method takes the lock once for its own mutation and never across an `.await`.
#[derive(Clone, Default)]
pub struct CartStore(Arc<Mutex<Vec<CartItem>>>);

impl CartStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of the items in insertion order.
  pub fn items(&self) -> Vec<CartItem> {
    self.0.lock().clone()
  }

  pub fn len(&self) -> usize {
    self.0.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.lock().is_empty()
  }

  /// Sets the quantity of the line holding `product_id`, creating the line if absent.
  pub fn upsert(&self, product_id: &ProductId, quantity: i64) -> CartItem {
    let mut items = self.0.lock();
    if let Some(existing) = items.iter_mut().find(|item| &item.product_id == product_id) {
      existing.quantity = quantity;
      return existing.clone();
    }
    let item = CartItem {
      id: Uuid::new_v4().simple().to_string(),
      product_id: product_id.clone(),
      quantity,
    };
    items.push(item.clone());
    item
  }

  pub fn update_quantity(&self, item_id: &str, quantity: i64) -> Option<CartItem> {
    let mut items = self.0.lock();
    let item = items.iter_mut().find(|item| item.id == item_id)?;
    item.quantity = quantity;
    Some(item.clone())
  }

  /// Returns `false` when no line had that id.
  pub fn remove(&self, item_id: &str) -> bool {
    let mut items = self.0.lock();
    let before = items.len();
    items.retain(|item| item.id != item_id);
    items.len() < before
  }

  /// Empties the cart, returning how many lines were dropped.
  pub fn clear(&self) -> usize {
    let mut items = self.0.lock();
    let dropped = items.len();
    items.clear();
    dropped
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repeat_upsert_overwrites_quantity() {
    let store = CartStore::new();
    let first = store.upsert(&ProductId::from("1"), 2);
    let second = store.upsert(&ProductId::from("1"), 5);

    assert_eq!(first.id, second.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].quantity, 5);
  }

  #[test]
  fn distinct_products_get_distinct_lines() {
    let store = CartStore::new();
    let a = store.upsert(&ProductId::from("1"), 1);
    let b = store.upsert(&ProductId::from("2"), 1);
    assert_ne!(a.id, b.id);
    assert_eq!(a.id.len(), 32);
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn update_and_remove_report_missing_items() {
    let store = CartStore::new();
    let item = store.upsert(&ProductId::from("3"), 1);

    assert!(store.update_quantity("missing", 4).is_none());
    assert_eq!(store.update_quantity(&item.id, 0).map(|i| i.quantity), Some(0));

    assert!(!store.remove("missing"));
    assert!(store.remove(&item.id));
    assert!(store.is_empty());
  }

  #[test]
  fn clones_share_one_cart() {
    let store = CartStore::new();
    let other = store.clone();
    store.upsert(&ProductId::from("1"), 1);
    store.upsert(&ProductId::from("2"), 1);
    assert_eq!(other.clear(), 2);
    assert!(store.is_empty());
  }
}
