// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: f64,
  pub quantity: i32,
  pub created_at: DateTime<Utc>,
}

/// One page of products plus the (possibly marginally stale) total row count.
#[derive(Debug, Serialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub total: i64,
  pub page: i64,
  #[serde(rename = "pageSize")]
  pub page_size: i64,
}
