//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Front-end origin allowed by CORS
    #[serde(default = "default_frontend_origin")]
    pub frontend_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            frontend_origin: default_frontend_origin(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load from `SERVER_HOST`, `SERVER_PORT` and `FRONTEND_ORIGIN`
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let frontend_origin =
            std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| default_frontend_origin());

        Self {
            host,
            port,
            frontend_origin,
        }
    }
}

fn default_frontend_origin() -> String {
    String::from("http://localhost:5173")
}
