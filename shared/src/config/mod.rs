//! Configuration module with business-specific sub-modules
//!
//! Every sub-configuration carries a `from_env()` loader so that secrets
//! (JWT keys, the payment provider key, media credentials) are always read
//! from the process environment and never compiled into the binary.

pub mod auth;
pub mod database;
pub mod environment;
pub mod media;
pub mod payment;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use media::MediaConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment the server is running in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub auth: AuthConfig,

    /// Payment provider configuration
    pub payment: PaymentConfig,

    /// Media upload configuration
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Fails with a human-readable message naming the first missing or
    /// malformed variable, so misconfigured deployments die at startup
    /// rather than at first use.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            payment: PaymentConfig::from_env()?,
            media: MediaConfig::from_env()?,
        })
    }
}

/// Read a required environment variable
pub(crate) fn require_env(name: &str) -> Result<String, String> {
    std::env::var(name).map_err(|_| format!("missing required environment variable {name}"))
}

/// Read an optional environment variable with a fallback
pub(crate) fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
