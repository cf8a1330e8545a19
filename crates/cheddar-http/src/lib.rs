//! HTTP transport for the CheddarGetter client
//!
//! This crate provides the transport adapter a higher-level billing client
//! uses to talk to the CheddarGetter API. The client only depends on the
//! [`Transport`] trait, so the underlying HTTP library (reqwest) can be
//! swapped out or replaced by a test double.
//!
//! # Example
//!
//! ```no_run
//! use cheddar_http::{HttpAdapter, RequestArgs, Transport};
//!
//! fn example() -> Result<(), cheddar_http::Error> {
//!     let adapter = HttpAdapter::new()?;
//!
//!     // GET
//!     let plans = adapter.request(
//!         "https://cheddargetter.com/xml/plans/get/productCode/MY_PRODUCT",
//!         "user@example.com",
//!         "secret",
//!         None,
//!     )?;
//!
//!     // POST
//!     let mut args = RequestArgs::new();
//!     args.insert("code".to_string(), "CUSTOMER_1".to_string());
//!     let customer = adapter.request(
//!         "https://cheddargetter.com/xml/customers/new/productCode/MY_PRODUCT",
//!         "user@example.com",
//!         "secret",
//!         Some(&args),
//!     )?;
//!     # let _ = (plans, customer);
//!     Ok(())
//! }
//! ```

mod adapter;
mod error;
mod response;
mod settings;
mod transport;

pub use adapter::{HttpAdapter, HttpAdapterBuilder};
pub use error::Error;
pub use response::RawResponse;
pub use settings::{
    AdapterConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use transport::{RequestArgs, Transport};
