//! Product service - business logic layer

use std::sync::Arc;

use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::store::ProductStore;

/// Service in front of the store.
///
/// The HTTP layer hands over signed identifiers; this layer rejects negative
/// ones and maps missing positions onto the not-found error, so the store
/// only deals in plain indices.
pub struct ProductService<S: ProductStore> {
    store: Arc<S>,
}

impl<S: ProductStore> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new ProductService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.store.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        let index = to_index(id)?;
        self.store
            .get(index)
            .await?
            .ok_or(ProductError::DoesNotExist)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: Product) -> ProductResult<Product> {
        self.store.append(product).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: i64, update: Product) -> ProductResult<Product> {
        let index = to_index(id)?;
        self.store
            .update(index, update)
            .await?
            .ok_or(ProductError::DoesNotExist)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let index = to_index(id)?;
        if self.store.remove(index).await? {
            Ok(())
        } else {
            Err(ProductError::DoesNotExist)
        }
    }
}

/// Negative identifiers are always out of range.
fn to_index(id: i64) -> ProductResult<usize> {
    usize::try_from(id).map_err(|_| ProductError::DoesNotExist)
}
