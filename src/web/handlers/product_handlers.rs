// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::{mutate_product, PageBounds, ProductMutation};
use crate::errors::{is_unique_violation, AppError};
use crate::models::{Product, ProductPage};
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct CreateProductPayload {
  pub name: String,
  pub price: f64,
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityPayload {
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub page: Option<String>,
  pub limit: Option<String>,
}

impl ListProductsQuery {
  /// Listing never rejects its query parameters: values that do not parse as
  /// integers coerce to the defaults before the usual floor/cap clamping.
  fn bounds(&self) -> PageBounds {
    let parse = |value: &Option<String>| value.as_deref().and_then(|s| s.parse::<i64>().ok());
    PageBounds::from_request(parse(&self.page), parse(&self.limit))
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::create_product", skip(app_state, payload), fields(product_name = %payload.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  if payload.name.trim().is_empty() {
    return Err(AppError::Validation("Missing required fields.".to_string()));
  }

  // Insert new product; name must be unique.
  let created: Product = sqlx::query_as(
    "INSERT INTO products (name, price, quantity) VALUES ($1, $2, $3) RETURNING id, name, price, quantity, created_at",
  )
  .bind(&payload.name)
  .bind(payload.price)
  .bind(payload.quantity)
  .fetch_one(&app_state.db_pool)
  .await
  .map_err(|e| {
    if is_unique_violation(&e) {
      warn!("Product name {:?} already exists.", payload.name);
      AppError::DuplicateName(payload.name.clone())
    } else {
      AppError::Storage(e)
    }
  })?;

  info!("Product {} created.", created.id);
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let bounds = query_params.bounds();

  let page_rows = sqlx::query_as::<_, Product>(
    "SELECT id, name, price, quantity, created_at FROM products ORDER BY created_at DESC OFFSET $1 LIMIT $2",
  )
  .bind(bounds.offset())
  .bind(bounds.limit)
  .fetch_all(&app_state.db_pool);

  let total_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products").fetch_one(&app_state.db_pool);

  // Independent reads with no ordering dependency; the pool hands each its
  // own connection, so the total may be marginally stale relative to the page.
  let (products, total) = futures_util::try_join!(page_rows, total_count)?;

  info!("Listed {} of {} products.", products.len(), total);
  Ok(HttpResponse::Ok().json(ProductPage {
    products,
    total,
    page: bounds.page,
    page_size: bounds.limit,
  }))
}

#[instrument(
  name = "handler::update_quantity",
  skip(app_state, path, payload),
  fields(product_id = %path.as_ref(), quantity = %payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<UpdateQuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let new_quantity = payload.quantity;

  // The guard looks only at the requested value, never at the stored row.
  let updated = mutate_product(
    &app_state.db_pool,
    product_id,
    |_current| {
      if new_quantity < 0 {
        return Err(AppError::Validation("Quantity cannot be negative.".to_string()));
      }
      Ok(())
    },
    ProductMutation::SetQuantity(new_quantity),
  )
  .await?
  .ok_or_else(|| AppError::Storage(sqlx::Error::RowNotFound))?;

  info!("Product {} quantity set to {}.", updated.id, updated.quantity);
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  mutate_product(&app_state.db_pool, product_id, |_current| Ok(()), ProductMutation::Delete).await?;

  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::NoContent().finish())
}
