//! Auth guard for entry into the protected admin area.

use thiserror::Error;

use emporium_api::ApiClient;
use emporium_core::AdminSession;

use crate::session::{SessionStore, TokenStore, TokenStoreError};

/// Why entry to the protected area was refused.
#[derive(Debug, Error)]
pub enum GuardError {
    /// No token is persisted; the caller should go straight to the public
    /// area. No network call was made.
    #[error("no admin session")]
    NotLoggedIn,

    /// A token was present but the server did not confirm an admin
    /// identity behind it (invalid token, non-admin account, or a failed
    /// request). The durable token has been cleared.
    #[error("admin session rejected")]
    Rejected,

    /// The durable token storage failed.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// Validate the persisted token and hydrate the session store.
///
/// Runs exactly once per protected-area entry. Absent token means an
/// immediate refusal with zero network calls; a present token is validated
/// against `/admin/is-admin` and any failure clears the durable token so
/// the next entry short-circuits.
///
/// # Errors
///
/// Returns [`GuardError::NotLoggedIn`] or [`GuardError::Rejected`] when the
/// caller should redirect to the public area, or a storage error if the
/// token could not be read or cleared.
#[tracing::instrument(skip_all)]
pub async fn ensure_admin(
    client: &ApiClient,
    store: &SessionStore,
    tokens: &dyn TokenStore,
) -> Result<AdminSession, GuardError> {
    let token = tokens.load()?.filter(|t| !t.is_empty());
    let Some(token) = token else {
        return Err(GuardError::NotLoggedIn);
    };

    match client.check_admin(&token).await {
        Ok(check) if check.is_admin => {
            let session = AdminSession {
                name: check.username,
                email: check.email,
                token,
            };
            store.set_admin(session.clone(), tokens)?;
            Ok(session)
        }
        Ok(_) => {
            tracing::info!("persisted token does not belong to an admin");
            store.logout(tokens)?;
            Err(GuardError::Rejected)
        }
        Err(err) => {
            tracing::info!(error = %err, "admin token validation failed");
            store.logout(tokens)?;
            Err(GuardError::Rejected)
        }
    }
}
