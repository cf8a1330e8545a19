//! HTTP response types

/// Raw HTTP response with status code and body access
///
/// Redirects are never followed, so a 3xx status and its `Location`
/// header are visible here exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    location: Option<String>,
    body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn new(status: u16, location: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            location,
            body,
        }
    }

    /// Read status, `Location` header and body out of a blocking response
    pub(crate) fn from_reqwest(
        response: reqwest::blocking::Response,
    ) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        Ok(Self::new(status, location, body))
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Value of the `Location` header, if present
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Get the response body as bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response, returning the body bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Get the response body as text
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
