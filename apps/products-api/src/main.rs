//! Products API - REST server over an in-memory store

use axum::middleware;
use axum_helpers::{create_app, not_found, request_log};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let router = api::routes(&config)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            config.server.base_url(),
            request_log,
        ));

    info!("Starting Products API on port {}", config.server.port);

    create_app(router, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
