// storefront/src/models/mod.rs

//! Plain data carried between the catalog, the cart and the HTTP layer.

pub mod cart_item;
pub mod product;
pub mod receipt;

pub use cart_item::{CartItem, CartLine, CartView};
pub use product::{Product, ProductId};
pub use receipt::{CustomerDetails, Receipt, ReceiptLine};
