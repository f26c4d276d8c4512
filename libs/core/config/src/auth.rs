use crate::{env_or_default, ConfigError, FromEnv};

/// Static API token configuration.
///
/// The token is compared verbatim against the `Authorization` header of every
/// request. An empty token leaves the API open, which is the posture used by
/// tests and local development.
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    token: String,
}

impl AuthConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Whether a request carrying `header` (None when the header is absent)
    /// may proceed.
    pub fn allows(&self, header: Option<&str>) -> bool {
        self.token.is_empty() || header == Some(self.token.as_str())
    }
}

impl FromEnv for AuthConfig {
    /// Reads `API_TOKEN`; unset means the API accepts any request.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token: env_or_default("API_TOKEN", ""),
        })
    }
}
