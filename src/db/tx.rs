// src/db/tx.rs

use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Product;

const SELECT_FOR_UPDATE: &str = "SELECT id, name, price, quantity, created_at FROM products WHERE id = $1 FOR UPDATE";

const UPDATE_QUANTITY_RETURNING: &str =
  "UPDATE products SET quantity = $1 WHERE id = $2 RETURNING id, name, price, quantity, created_at";

/// The mutation applied to a locked product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMutation {
  SetQuantity(i32),
  Delete,
}

/// Runs a single-row mutation under a row lock.
///
/// Sequence: begin a transaction on a dedicated pooled connection, lock the
/// target row with `SELECT ... FOR UPDATE`, evaluate `precondition` against
/// the locked row, apply `mutation`, commit. The lock serializes all mutating
/// access to one `id` for the duration of the transaction; other ids are
/// unaffected.
///
/// Every early exit (`?`, not-found, precondition failure) drops or rolls
/// back the `Transaction`, which also returns the connection to the pool, so
/// cleanup holds on all paths.
///
/// Returns the updated row for [`ProductMutation::SetQuantity`], `None` for
/// [`ProductMutation::Delete`].
#[instrument(name = "db::mutate_product", skip(pool, precondition))]
pub async fn mutate_product<P>(
  pool: &PgPool,
  id: Uuid,
  precondition: P,
  mutation: ProductMutation,
) -> Result<Option<Product>>
where
  P: FnOnce(&Product) -> Result<()>,
{
  let mut tx = pool.begin().await?;

  // Lock the row for update, if it exists.
  let locked: Option<Product> = sqlx::query_as(SELECT_FOR_UPDATE)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

  let Some(current) = locked else {
    tx.rollback().await?;
    warn!("Product {} not found.", id);
    return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
  };

  if let Err(reject) = precondition(&current) {
    tx.rollback().await?;
    return Err(reject);
  }

  let outcome = match mutation {
    ProductMutation::SetQuantity(quantity) => {
      let updated: Product = sqlx::query_as(UPDATE_QUANTITY_RETURNING)
        .bind(quantity)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
      Some(updated)
    }
    ProductMutation::Delete => {
      sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
      None
    }
  };

  tx.commit().await?;
  Ok(outcome)
}
