//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// HTTP server bind configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Number of HTTP workers (0 lets actix pick one per core)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: 0,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let port = env_or("SERVER_PORT", "8000")
            .parse::<u16>()
            .map_err(|_| "SERVER_PORT must be a valid port number".to_string())?;
        let workers = env_or("SERVER_WORKERS", "0")
            .parse::<usize>()
            .map_err(|_| "SERVER_WORKERS must be a non-negative integer".to_string())?;

        Ok(Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port,
            workers,
        })
    }

    /// Address string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            workers: 2,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
