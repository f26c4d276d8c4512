//! Request-pipeline middleware: the auth gate and request logging.

pub mod auth;
pub mod logging;

pub use auth::token_auth;
pub use logging::request_log;
