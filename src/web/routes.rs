// src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

// No store access; reports liveness only.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Rewrites actix extractor rejections (malformed JSON bodies, non-UUID path
/// segments) into the uniform `{"error": ...}` 400 body. Listing query
/// parameters are deserialized leniently in the handler and never reject.
fn extractor_configs() -> (web::JsonConfig, web::PathConfig) {
  let json = web::JsonConfig::default().error_handler(|err, _req| {
    tracing::warn!(rejection = %err, "Rejected request body");
    AppError::Validation("Invalid request body.".to_string()).into()
  });
  let path = web::PathConfig::default().error_handler(|err, _req| {
    tracing::warn!(rejection = %err, "Rejected path parameter");
    AppError::Validation("Invalid product id.".to_string()).into()
  });
  (json, path)
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  let (json, path) = extractor_configs();
  cfg
    .app_data(json)
    .app_data(path)
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Product Routes
    .service(
      web::scope("/products")
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("", web::get().to(product_handlers::list_products_handler))
        .route(
          "/{product_id}/quantity",
          web::put().to(product_handlers::update_quantity_handler),
        )
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
    );
}
