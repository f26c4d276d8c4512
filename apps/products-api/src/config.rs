//! Configuration for Products API

use core_config::{auth::AuthConfig, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let auth = AuthConfig::from_env()?;

        Ok(Self {
            server,
            auth,
            environment,
        })
    }
}
