// storefront/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::state::AppState;

pub async fn health_check_handler(app_state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
  let origin = req
    .headers()
    .get("Origin")
    .and_then(|v| v.to_str().ok())
    .unwrap_or("No Origin Header");

  HttpResponse::Ok().json(json!({
    "status": "OK",
    "message": "Server is running",
    "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    "origin": origin,
    "catalog": { "backend": app_state.catalog.backend() },
  }))
}
