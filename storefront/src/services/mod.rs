// storefront/src/services/mod.rs

//! Cart and checkout logic shared by the pipelines and handlers.

pub mod cart;
pub mod cart_store;
pub mod checkout;
pub mod pricing;

pub use cart::CartService;
pub use cart_store::CartStore;
pub use checkout::CheckoutService;
