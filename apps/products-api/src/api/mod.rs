//! API routes module

pub mod products;

use axum::{middleware, Router};
use axum_helpers::token_auth;

use crate::config::Config;

/// All API routes, with the token gate in front of the product endpoints
pub fn routes(config: &Config) -> Router {
    let products = products::router().layer(middleware::from_fn_with_state(
        config.auth.clone(),
        token_auth,
    ));

    Router::new().nest("/products", products)
}
