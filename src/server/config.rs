//! Environment configuration.

use crate::server::{error::config::ConfigError, service::identity::DEFAULT_ADMIN_PASSWORD};

/// Address the HTTP listener binds to when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration read from the process environment.
pub struct Config {
    /// SeaORM connection URL (Postgres or SQLite).
    pub database_url: String,
    /// Valkey/Redis URL backing the session store.
    pub valkey_url: String,
    /// Socket address for the HTTP listener.
    pub bind_address: std::net::SocketAddr,
    /// Credential given to the administrator account when it is first created.
    pub admin_password: String,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is present but unusable
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional_var("BIND_ADDRESS")?
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let admin_password = optional_var("ADMIN_PASSWORD")?
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
        if admin_password.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "ADMIN_PASSWORD".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address,
            admin_password,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
