//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{status, message}` error envelope
//! - **[`response`]**: the `{data, message}` success envelope
//! - **[`extractors`]**: custom extractors (integer id path, validated JSON)
//! - **[`middleware`]**: token auth gate and request logging
//! - **[`server`]**: listener setup and graceful shutdown

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod server;

// Re-export error types
pub use errors::{not_found, AppError, ErrorResponse};

// Re-export the success envelope helpers
pub use response::{created, ok, Envelope};

// Re-export extractors
pub use extractors::{validation_message, IdPath, ValidatedJson};

// Re-export middleware
pub use middleware::{request_log, token_auth};

// Re-export server helpers
pub use server::{create_app, shutdown_signal};
