// src/db/mod.rs

//! Store access helpers: the locked single-row mutation pattern and
//! pagination bounds arithmetic.

pub mod pagination;
pub mod tx;

pub use pagination::PageBounds;
pub use tx::{mutate_product, ProductMutation};
