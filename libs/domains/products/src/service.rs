//! Product service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use axum_helpers::validation_message;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// The service validates incoming request bodies, converts them into typed
/// candidates, and orchestrates repository operations. Uniqueness and id
/// assignment stay inside the repository where the stored state lives.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every stored product
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// A product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product; the repository assigns the id
    #[instrument(skip(self, input), fields(code_value = %input.code_value))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        self.repository.save(input.into_data()?).await
    }

    /// Replace every field of an existing product, id preserved
    #[instrument(skip(self, input))]
    pub async fn replace_product(&self, id: i64, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        self.repository.update(id, input.into_data()?).await
    }

    /// Merge the supplied fields onto an existing product.
    ///
    /// Only the fields present in `input` are validated; stored fields the
    /// patch leaves alone are not re-checked. Code-value uniqueness of the
    /// merged record is the repository's responsibility.
    #[instrument(skip(self, input))]
    pub async fn patch_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        self.repository.update_partial(id, input.into_patch()?).await
    }

    /// Remove a product outright
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn valid_body() -> CreateProduct {
        CreateProduct {
            name: "Product 1".to_string(),
            quantity: 10,
            code_value: "code1".to_string(),
            is_published: true,
            expiration: "2021-12-31".to_string(),
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_the_repository() {
        // No expectations set: any repository call would panic the test
        let service = ProductService::new(MockProductRepository::new());

        let mut body = valid_body();
        body.name = String::new();
        body.quantity = -2;

        let err = service.create_product(body).await.unwrap_err();
        match err {
            ProductError::Validation(msg) => {
                assert_eq!(msg, "name must not be empty; quantity must not be negative");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_passes_the_typed_candidate_to_the_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_save()
            .withf(|data| data.code_value == "code1" && data.quantity == 10)
            .returning(|data| Ok(Product::from_data(1, data)));

        let service = ProductService::new(repo);
        let product = service.create_product(valid_body()).await.unwrap();
        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn create_surfaces_duplicate_code_values() {
        let mut repo = MockProductRepository::new();
        repo.expect_save()
            .returning(|data| Err(ProductError::DuplicateCodeValue(data.code_value)));

        let service = ProductService::new(repo);
        let err = service.create_product(valid_body()).await.unwrap_err();
        assert!(matches!(err, ProductError::DuplicateCodeValue(ref c) if c == "code1"));
    }

    #[tokio::test]
    async fn get_maps_absent_records_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(42).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(42)));
    }

    #[tokio::test]
    async fn patch_rejects_invalid_present_fields_before_the_repository() {
        let service = ProductService::new(MockProductRepository::new());

        let patch = UpdateProduct {
            expiration: Some("12/31/2021".to_string()),
            ..UpdateProduct::default()
        };

        let err = service.patch_product(1, patch).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn patch_accepts_an_empty_body() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_partial()
            .withf(|id, patch| *id == 1 && *patch == crate::models::ProductPatch::default())
            .returning(|id, _| {
                Ok(Product::from_data(
                    id,
                    valid_body().into_data().unwrap(),
                ))
            });

        let service = ProductService::new(repo);
        let product = service
            .patch_product(1, UpdateProduct::default())
            .await
            .unwrap();
        assert_eq!(product.id, 1);
    }
}
