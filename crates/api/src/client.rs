//! The loyalty API client.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use url::Url;

use emporium_core::{AuditLogEntry, CustomerId, CustomerRecord, LogId};

use crate::{
    ApiError,
    types::{AdminCheck, CustomerUpdate, LoginResponse, NewCustomer},
};

/// Typed client for the loyalty API.
///
/// Cheap to clone; all clones share one connection pool. The client holds no
/// credential state - callers pass the bearer token per call, which keeps
/// session ownership in one place (the session store) instead of two.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    client: reqwest::Client,
    base: Url,
}

/// Error body shape the server uses for all failure responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PointsBody {
    points: i64,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Create a new client for the API at `base`.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base,
            }),
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.inner.base
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{path}",
            self.inner.base.as_str().trim_end_matches('/')
        )
    }

    /// Convert a non-success response into an [`ApiError`], preferring the
    /// server's own error message when the body carries one.
    async fn error_from(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);

        match message {
            Some(message) => ApiError::Server(message),
            None => match status {
                StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
                StatusCode::NOT_FOUND => ApiError::NotFound,
                _ => ApiError::Status(status.as_u16()),
            },
        }
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    // =========================================================================
    // Public endpoints
    // =========================================================================

    /// Look up a points balance by phone number. No credential required.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or the request fails.
    #[instrument(skip(self))]
    pub async fn lookup_points(&self, phone: &str) -> Result<i64, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("customers/lookup"))
            .json(&json!({ "phone": phone }))
            .send()
            .await?;

        let body: PointsBody = Self::ensure_success(response).await?.json().await?;
        Ok(body.points)
    }

    /// Exchange admin credentials for a bearer token.
    ///
    /// A success response may still lack a token; callers must treat that
    /// the same as a rejection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// credentials.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("admin/login"))
            .json(&json!({ "email": email, "password": password.expose_secret() }))
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    // =========================================================================
    // Protected endpoints
    // =========================================================================

    /// Validate a persisted token and fetch the admin identity behind it.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, token))]
    pub async fn check_admin(&self, token: &str) -> Result<AdminCheck, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("admin/is-admin"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    /// Search customer records. The server matches `query` across fields
    /// and returns a superset; callers narrow it further client-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn search_customers(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<CustomerRecord>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("customers/search"))
            .query(&[("q", query)])
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    /// Create a customer record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Server` with the server's message verbatim when
    /// creation is rejected (e.g. duplicate phone).
    #[instrument(skip(self, token))]
    pub async fn create_customer(
        &self,
        token: &str,
        customer: &NewCustomer,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("customers"))
            .bearer_auth(token)
            .json(customer)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Update fields on a customer record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    #[instrument(skip(self, token), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        token: &str,
        id: &CustomerId,
        update: &CustomerUpdate,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(self.url(&format!("customers/{id}")))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Adjust a customer's point balance by a signed delta.
    ///
    /// The body carries the delta, not the absolute new value; the server
    /// applies it and records an audit log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    #[instrument(skip(self, token), fields(customer_id = %id))]
    pub async fn adjust_points(
        &self,
        token: &str,
        id: &CustomerId,
        amount: i64,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .patch(self.url(&format!("customers/{id}/points")))
            .bearer_auth(token)
            .json(&json!({ "amount": amount }))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Delete a customer record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    #[instrument(skip(self, token), fields(customer_id = %id))]
    pub async fn delete_customer(&self, token: &str, id: &CustomerId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.url(&format!("customers/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Download the tabular customer export.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn export_customers(&self, token: &str) -> Result<String, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("customers/export-customers"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.text().await?)
    }

    /// Fetch the admin action log.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn admin_logs(&self, token: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("admin/logs"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    /// Trigger the compensating undo for a logged action.
    ///
    /// Returns the server's confirmation message, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the action is not undoable
    /// server-side.
    #[instrument(skip(self, token), fields(log_id = %id))]
    pub async fn undo_log_action(
        &self,
        token: &str,
        id: &LogId,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(&format!("admin/logs/{id}/undo")))
            .bearer_auth(token)
            .send()
            .await?;

        let body: MessageBody = Self::ensure_success(response).await?.json().await?;
        Ok(body.message)
    }
}
