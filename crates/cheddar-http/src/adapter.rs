//! reqwest-based HTTP adapter

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::redirect::Policy;

use crate::error::Error;
use crate::response::RawResponse;
use crate::settings::AdapterConfig;
use crate::transport::{RequestArgs, Transport};

/// HTTP adapter for the CheddarGetter API
///
/// Owns one blocking [`Client`] that is reused for every request. No
/// per-request state is kept on the adapter, so sequential calls never see
/// the method or body fields of an earlier call.
///
/// The blocking client must not be created or dropped from within an async
/// runtime.
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    inner: Client,
}

impl HttpAdapter {
    /// Create an adapter with the default client settings
    ///
    /// Redirects are not followed, TLS certificates are verified, the read
    /// timeout is 100 seconds and the connect timeout 120 seconds.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&AdapterConfig::default())
    }

    /// Create an adapter builder
    pub fn builder() -> HttpAdapterBuilder {
        HttpAdapterBuilder::default()
    }

    /// Create an adapter from settings
    pub fn from_config(config: &AdapterConfig) -> Result<Self, Error> {
        HttpAdapterBuilder {
            config: config.clone(),
        }
        .build()
    }

    /// Create an adapter around a caller-configured client
    ///
    /// The client is used as is, including its redirect and TLS policy.
    pub fn with_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Execute an API request and return the full response
    ///
    /// Empty `args` are treated the same as `None` and send a GET.
    #[tracing::instrument(
        skip(self, username, password, args),
        fields(method = tracing::field::Empty)
    )]
    pub fn execute(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<RawResponse, Error> {
        let (method, builder) = match args.filter(|args| !args.is_empty()) {
            Some(args) => ("POST", self.inner.post(url).form(args)),
            None => ("GET", self.inner.get(url)),
        };
        tracing::Span::current().record("method", method);
        tracing::debug!("Sending {method} request");

        let response = builder.basic_auth(username, Some(password)).send()?;
        let response = RawResponse::from_reqwest(response)?;

        if response.is_redirect() {
            tracing::warn!(
                "Not following redirect ({}) to {}",
                response.status(),
                response.location().unwrap_or("<no location>")
            );
        } else {
            tracing::debug!("Response status {}", response.status());
        }

        Ok(response)
    }
}

impl Transport for HttpAdapter {
    fn request(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<String, Error> {
        self.execute(url, username, password, args)
            .map(|response| response.text())
    }
}

/// HTTP adapter builder for configuring timeouts and the user agent
#[derive(Debug, Default)]
pub struct HttpAdapterBuilder {
    config: AdapterConfig,
}

impl HttpAdapterBuilder {
    /// Set the read timeout in seconds
    ///
    /// Applies to each read from the connection and resets after every
    /// successful read. A slow response that keeps sending data is not cut off.
    pub fn read_timeout_secs(mut self, secs: u64) -> Self {
        self.config.read_timeout_secs = secs;
        self
    }

    /// Set the connect timeout in seconds
    ///
    /// Covers establishing the connection, including the TLS handshake.
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.config.connect_timeout_secs = secs;
        self
    }

    /// Set the host server name the user agent is derived from
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.config.server_name = Some(name.into());
        self
    }

    /// Set an explicit user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build the adapter
    pub fn build(self) -> Result<HttpAdapter, Error> {
        self.config.validate()?;

        let user_agent = self.config.user_agent();
        let builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .read_timeout(self.config.read_timeout())
            .connect_timeout(self.config.connect_timeout())
            .user_agent(user_agent.as_str())
            .danger_accept_invalid_certs(false);

        // No deadline on the whole exchange, only the per-read and connect limits
        let client = ClientBuilder::from(builder)
            .timeout(None)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client unavailable: {e}")))?;

        tracing::debug!(
            "Built HTTP adapter (user agent: {user_agent}, read timeout: {}s, connect timeout: {}s)",
            self.config.read_timeout_secs,
            self.config.connect_timeout_secs
        );

        Ok(HttpAdapter { inner: client })
    }
}
