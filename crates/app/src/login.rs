//! Admin login: exchange credentials for a bearer token.

use secrecy::SecretString;
use thiserror::Error;

use emporium_api::{ApiClient, ApiError};
use emporium_core::AdminSession;

use crate::session::{SessionStore, TokenStore, TokenStoreError};

/// Login failure. Field-level validation errors are deliberately not
/// distinguished.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The server rejected the credentials, or accepted them without
    /// returning a usable token.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The request itself failed before the server could answer.
    #[error("Login failed. Please try again.")]
    RequestFailed(#[source] ApiError),

    /// The durable token storage failed.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// Log an administrator in and populate the session store.
///
/// A success response missing a token is treated identically to a
/// non-success response.
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] for any server-side
/// rejection, [`LoginError::RequestFailed`] for transport failures.
#[tracing::instrument(skip_all, fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    tokens: &dyn TokenStore,
    email: &str,
    password: &SecretString,
) -> Result<AdminSession, LoginError> {
    let response = match client.login(email, password).await {
        Ok(response) => response,
        Err(err @ ApiError::Http(_)) => return Err(LoginError::RequestFailed(err)),
        Err(err) => {
            tracing::debug!(error = %err, "login rejected");
            return Err(LoginError::InvalidCredentials);
        }
    };

    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or(LoginError::InvalidCredentials)?;

    let session = AdminSession {
        name: response.username,
        email: response.email,
        token,
    };
    store.set_admin(session.clone(), tokens)?;
    Ok(session)
}
