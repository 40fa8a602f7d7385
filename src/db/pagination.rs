// src/db/pagination.rs

/// Clamped offset/limit window for product listing.
///
/// `page` is floored at 1 so the offset can never go negative; `limit` is
/// clamped to `1..=MAX_LIMIT` regardless of client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
  pub page: i64,
  pub limit: i64,
}

impl PageBounds {
  pub const DEFAULT_LIMIT: i64 = 10;
  pub const MAX_LIMIT: i64 = 100;

  pub fn from_request(page: Option<i64>, limit: Option<i64>) -> Self {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT);
    Self { page, limit }
  }

  pub fn offset(&self) -> i64 {
    // page is floored at 1, so the subtraction cannot underflow; saturate the
    // product so an absurd page number cannot wrap into a negative offset.
    (self.page - 1).saturating_mul(self.limit)
  }
}
