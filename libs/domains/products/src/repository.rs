use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductData, ProductPatch};

/// Repository trait for product storage.
///
/// This trait defines the data access interface for products; the service
/// layer only talks to storage through it. Every method returns owned
/// values, never references into the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in backing-map iteration order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// A product by id, `None` when absent
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Store a new product under the next free id and return it
    async fn save(&self, data: ProductData) -> ProductResult<Product>;

    /// Replace the record stored under `id` wholesale, id preserved
    async fn update(&self, id: i64, data: ProductData) -> ProductResult<Product>;

    /// Merge the present fields of `patch` onto the record stored under `id`
    async fn update_partial(&self, id: i64, patch: ProductPatch) -> ProductResult<Product>;

    /// Remove the record stored under `id`
    async fn delete(&self, id: i64) -> ProductResult<()>;
}
