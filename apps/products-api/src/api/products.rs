//! Products API routes

use axum::Router;
use domain_products::{handlers, MemoryProductRepository, ProductService};

/// Create products router backed by a fresh in-memory store
pub fn router() -> Router {
    let repository = MemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}
