//! Adapter error types

use thiserror::Error;

/// Errors returned by the HTTP adapter
#[derive(Debug, Error)]
pub enum Error {
    /// The adapter could not be configured
    ///
    /// Raised at construction time, before any network I/O.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Transport error (connection, timeout, TLS, body read)
    #[error("Transport error")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// True if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }

    /// True if the connection (including the TLS handshake) failed
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_connect())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = Error::Config("read timeout must be greater than zero".to_string());
        assert_eq!(
            format!("{}", error),
            "Configuration error: read timeout must be greater than zero"
        );
    }

    #[test]
    fn test_transport_error_keeps_cause_as_source() {
        use std::error::Error as _;

        let cause = reqwest::blocking::Client::new()
            .get("not a url")
            .send()
            .expect_err("Invalid URL should fail before any I/O");
        let cause_message = cause.to_string();
        let error = Error::from(cause);

        assert_eq!(format!("{}", error), "Transport error");
        let source = error.source().expect("Transport error has a source");
        assert_eq!(source.to_string(), cause_message);
    }

    #[test]
    fn test_config_error_is_not_transport() {
        let error = Error::Config("bad".to_string());
        assert!(!error.is_timeout());
        assert!(!error.is_connect());
    }

    #[test]
    fn test_from_config_crate_error() {
        let error: Error = config::ConfigError::NotFound("read_timeout_secs".to_string()).into();

        match error {
            Error::Config(msg) => assert!(msg.contains("read_timeout_secs")),
            Error::Transport(_) => panic!("Expected Error::Config"),
        }
    }
}
