//! Products Domain
//!
//! A complete domain implementation for managing products over an in-memory
//! store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MemoryProductRepository, ProductService};
//!
//! let repository = MemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Create the Axum router, nested under /products by the app
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::MemoryProductRepository;
pub use models::{CreateProduct, Product, ProductData, ProductPatch, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
