//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `VGSALES_*` environment variables, or a
//! configuration file. Every field is optional; accessors supply defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_PATH: &str = "vgsales.csv";
const DEFAULT_USERS_FILE: &str = "users.json";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address could not be parsed as `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Process-level settings for the sales service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VGSALES")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Path to the sales CSV.
    pub data_path: Option<PathBuf>,
    /// Path to the JSON credential file.
    pub users_file: Option<PathBuf>,
}

impl AppSettings {
    /// Return the configured listener address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the dataset path, falling back to `vgsales.csv`.
    pub fn data_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    /// Return the credential file path, falling back to `users.json`.
    pub fn users_file(&self) -> PathBuf {
        self.users_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_FILE))
    }
}
