//! HTTP client for the remote loyalty API.
//!
//! All customer storage, admin authentication, and audit log storage live
//! behind this API; the client is a thin, typed wrapper around the JSON
//! endpoints. Protected calls carry a bearer token obtained from
//! `/admin/login` and validated by `/admin/is-admin`.
//!
//! # Example
//!
//! ```rust,ignore
//! use emporium_api::ApiClient;
//!
//! let client = ApiClient::new(config.api_url.clone());
//!
//! // Public points lookup
//! let points = client.lookup_points("5550001111").await?;
//!
//! // Protected search
//! let customers = client.search_customers(&token, "smith").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod types;

pub use client::ApiClient;
pub use types::{AdminCheck, CustomerUpdate, LoginResponse, NewCustomer};

use thiserror::Error;

/// Errors that can occur when talking to the loyalty API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request and supplied an error message.
    #[error("{0}")]
    Server(String),

    /// The bearer token was missing, invalid, or expired.
    #[error("Unauthorized")]
    Unauthorized,

    /// The requested resource does not exist.
    #[error("Not found")]
    NotFound,

    /// Any other non-success status without a server-provided message.
    #[error("Request failed with status {0}")]
    Status(u16),
}
