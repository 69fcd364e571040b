//! Lagoon API access.
//!
//! - `client` - The request/response pipeline (ApiClient, ApiError)

pub mod client;

pub use client::{ApiClient, ApiError, ClientConfig, RequestObserver};
