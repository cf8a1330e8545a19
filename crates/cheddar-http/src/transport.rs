//! Transport trait consumed by the billing client

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Error;

/// POST body fields, field name to value
pub type RequestArgs = BTreeMap<String, String>;

/// A transport able to execute one authenticated API request
///
/// The higher-level client only talks to this trait. [`crate::HttpAdapter`]
/// is the production implementation; tests can provide their own.
pub trait Transport {
    /// Execute an API request and return the body of the response
    ///
    /// `args` of `None` (or an empty map) sends a GET request. Non-empty
    /// `args` are sent as a form-encoded POST body. Both use HTTP Basic
    /// authentication with `username` and `password`.
    fn request(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<String, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<String, Error> {
        (**self).request(url, username, password, args)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<String, Error> {
        (**self).request(url, username, password, args)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(
        &self,
        url: &str,
        username: &str,
        password: &str,
        args: Option<&RequestArgs>,
    ) -> Result<String, Error> {
        (**self).request(url, username, password, args)
    }
}
