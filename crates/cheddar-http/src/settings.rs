//! Adapter settings

use std::path::Path;
use std::time::Duration;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default read timeout in seconds
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 100;
/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 120;
/// User agent sent when no server name is known
pub const DEFAULT_USER_AGENT: &str = "CheddarGetter_Client Rust";

/// Settings used to build the default HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Read timeout in seconds
    ///
    /// Applies to each read from the connection, not to the whole exchange.
    pub read_timeout_secs: u64,
    /// Connect timeout in seconds, including the TLS handshake
    pub connect_timeout_secs: u64,
    /// Name of the host server, used to build the user agent
    pub server_name: Option<String>,
    /// Explicit user agent, takes precedence over `server_name`
    pub user_agent: Option<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_name: None,
            user_agent: None,
        }
    }
}

impl AdapterConfig {
    /// Load settings from a TOML file, falling back to defaults for missing keys
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let defaults = Self::default();

        let settings: Self = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded adapter settings from {}", path.display());
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can be used to build a client
    pub fn validate(&self) -> Result<(), Error> {
        if self.read_timeout_secs == 0 {
            return Err(Error::Config(
                "read timeout must be greater than zero".to_string(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(Error::Config(
                "connect timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Read timeout as a [`Duration`]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Connect timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Resolve the user agent string
    ///
    /// An explicit `user_agent` wins, then `"<server_name> - CheddarGetter_Client Rust"`,
    /// then [`DEFAULT_USER_AGENT`].
    pub fn user_agent(&self) -> String {
        if let Some(user_agent) = &self.user_agent {
            return user_agent.clone();
        }

        match self.server_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("{name} - {DEFAULT_USER_AGENT}"),
            _ => DEFAULT_USER_AGENT.to_string(),
        }
    }
}
