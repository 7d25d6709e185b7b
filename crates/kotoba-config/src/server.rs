//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

/// Default request body limit (50 MiB); shuffle requests carry the whole list.
const fn default_body_limit_bytes() -> usize {
    50 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:3000`.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            cors_origins: Vec::new(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerConfig {
    /// Whether CORS is restricted to an explicit origin list.
    pub fn restricts_origins(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}
