//! Integration tests for the Emporium rewards desk.
//!
//! These tests run against a live rewards API and are `#[ignore]`d by
//! default.
//!
//! # Running Tests
//!
//! ```bash
//! export EMPORIUM_API_URL=http://localhost:3000
//! export EMPORIUM_ADMIN_EMAIL=admin@example.com
//! export EMPORIUM_ADMIN_PASSWORD=secret
//!
//! cargo test -p emporium-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `points_lookup` - public lookup endpoint
//! - `customer_admin` - authenticated customer CRUD and audit log

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use url::Url;

use emporium_api::ApiClient;

/// Base URL of the API under test (configurable via environment).
#[must_use]
pub fn api_base_url() -> Url {
    let raw = std::env::var("EMPORIUM_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_owned());
    Url::parse(&raw).expect("EMPORIUM_API_URL must be a valid URL")
}

/// An API client plus a valid admin bearer token.
pub struct TestContext {
    pub client: ApiClient,
    pub token: String,
}

impl TestContext {
    /// Log in with the credentials from the environment.
    ///
    /// # Panics
    ///
    /// Panics when credentials are missing or rejected; these tests
    /// cannot run without a live admin account.
    pub async fn new() -> Self {
        let client = ApiClient::new(api_base_url());

        let email =
            std::env::var("EMPORIUM_ADMIN_EMAIL").expect("EMPORIUM_ADMIN_EMAIL must be set");
        let password = SecretString::from(
            std::env::var("EMPORIUM_ADMIN_PASSWORD").expect("EMPORIUM_ADMIN_PASSWORD must be set"),
        );

        let response = client.login(&email, &password).await.expect("admin login");
        let token = response.token.expect("login response carried no token");

        Self { client, token }
    }
}

/// A phone number unlikely to collide with real data.
#[must_use]
pub fn unique_phone() -> String {
    let tail = uuid::Uuid::new_v4().as_u128() % 10_000_000;
    format!("555{tail:07}")
}
