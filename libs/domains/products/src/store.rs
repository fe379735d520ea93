use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage interface for the product catalog.
///
/// Positions double as the public identifiers, so implementations must keep
/// the catalog ordered and make each range-check-plus-mutation atomic.
/// Identifiers are deliberately unstable across deletions: removal swaps the
/// last element into the hole instead of shifting the tail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Snapshot of the catalog in positional order.
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Product at `index`, or `None` when the index is out of range.
    async fn get(&self, index: usize) -> ProductResult<Option<Product>>;

    /// Append a product at the end of the catalog.
    async fn append(&self, product: Product) -> ProductResult<Product>;

    /// Merge `update` into the product at `index`; `None` when out of range.
    async fn update(&self, index: usize, update: Product) -> ProductResult<Option<Product>>;

    /// Swap-remove the product at `index`; `false` when out of range.
    async fn remove(&self, index: usize) -> ProductResult<bool>;
}
