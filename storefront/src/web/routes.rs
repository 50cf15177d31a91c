// storefront/src/web/routes.rs

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

use crate::web::handlers::{cart_handlers, checkout_handlers, health_handlers, product_handlers};

/// Malformed or non-JSON bodies become a 400 with the same `{"message"}` shape as other errors.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    let message = err.to_string();
    tracing::warn!(error = %message, "Rejected request body.");
    InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "message": message }))).into()
  })
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(json_config())
      .route("/health", web::get().to(health_handlers::health_check_handler))
      .route("/products", web::get().to(product_handlers::list_products_handler))
      .service(
        web::resource("/cart")
          .route(web::get().to(cart_handlers::get_cart_handler))
          .route(web::post().to(cart_handlers::add_to_cart_handler)),
      )
      .service(
        web::resource("/cart/{item_id}")
          .route(web::put().to(cart_handlers::update_cart_item_handler))
          .route(web::delete().to(cart_handlers::remove_cart_item_handler)),
      )
      .route("/checkout", web::post().to(checkout_handlers::checkout_handler)),
  );
}
