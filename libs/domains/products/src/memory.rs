//! In-memory repository backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductPatch};
use crate::repository::ProductRepository;

/// In-memory product store.
///
/// The id → product map is the only shared mutable state in the service. A
/// single mutex guards it, and every operation performs its whole
/// read-then-write sequence (id computation + insert, existence check +
/// uniqueness check + mutation) inside one critical section, so concurrent
/// creates cannot mint duplicate ids and updates cannot interleave. No
/// `.await` happens while the lock is held.
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    products: Mutex<HashMap<i64, Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with existing products, keyed by their ids.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: Mutex::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A request that panicked mid-flight must not wedge the store for every
    // later request, so poisoning is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, HashMap<i64, Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(products: &HashMap<i64, Product>) -> i64 {
        products.keys().max().copied().unwrap_or(0) + 1
    }

    fn code_value_taken(
        products: &HashMap<i64, Product>,
        code_value: &str,
        exclude: Option<i64>,
    ) -> bool {
        products
            .values()
            .any(|p| Some(p.id) != exclude && p.code_value == code_value)
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.lock().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn save(&self, data: ProductData) -> ProductResult<Product> {
        let mut products = self.lock();

        if Self::code_value_taken(&products, &data.code_value, None) {
            return Err(ProductError::DuplicateCodeValue(data.code_value));
        }

        let id = Self::next_id(&products);
        let product = Product::from_data(id, data);
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, data: ProductData) -> ProductResult<Product> {
        let mut products = self.lock();

        if !products.contains_key(&id) {
            return Err(ProductError::NotFound(id));
        }
        if Self::code_value_taken(&products, &data.code_value, Some(id)) {
            return Err(ProductError::DuplicateCodeValue(data.code_value));
        }

        let product = Product::from_data(id, data);
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_partial(&self, id: i64, patch: ProductPatch) -> ProductResult<Product> {
        let mut products = self.lock();

        // Merge onto a clone first; the stored record must stay untouched if
        // the merged code value collides.
        let mut merged = products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))?;
        merged.apply_patch(patch);

        if Self::code_value_taken(&products, &merged.code_value, Some(id)) {
            return Err(ProductError::DuplicateCodeValue(merged.code_value));
        }

        products.insert(id, merged.clone());
        Ok(merged)
    }

    async fn delete(&self, id: i64) -> ProductResult<()> {
        let mut products = self.lock();

        if products.remove(&id).is_none() {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}
