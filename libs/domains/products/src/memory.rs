//! In-memory implementation of ProductStore

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::store::ProductStore;

/// In-memory catalog: one ordered `Vec` behind one exclusive lock.
///
/// There is no reader/writer distinction; every access takes the same lock
/// and holds it only for the span of the access. Nothing is persisted: the
/// catalog is discarded with the process.
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    /// Create a store holding `initial` in the given order.
    pub fn new(initial: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(initial),
        }
    }

    fn guard(&self) -> ProductResult<MutexGuard<'_, Vec<Product>>> {
        self.products
            .lock()
            .map_err(|_| ProductError::Internal("product store lock poisoned".to_string()))
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.guard()?.clone())
    }

    async fn get(&self, index: usize) -> ProductResult<Option<Product>> {
        Ok(self.guard()?.get(index).cloned())
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn append(&self, product: Product) -> ProductResult<Product> {
        self.guard()?.push(product.clone());
        Ok(product)
    }

    async fn update(&self, index: usize, update: Product) -> ProductResult<Option<Product>> {
        let mut products = self.guard()?;
        match products.get_mut(index) {
            Some(existing) => {
                existing.apply_update(update);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn remove(&self, index: usize) -> ProductResult<bool> {
        let mut products = self.guard()?;
        if index >= products.len() {
            return Ok(false);
        }
        // Swap-to-end compaction: the last element takes over the vacated
        // position instead of shifting the whole tail.
        products.swap_remove(index);
        Ok(true)
    }
}
