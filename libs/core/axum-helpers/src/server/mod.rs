//! Server setup and graceful shutdown.

pub mod app;
pub mod shutdown;

pub use app::create_app;
pub use shutdown::shutdown_signal;
