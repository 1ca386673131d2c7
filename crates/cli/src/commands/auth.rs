//! Admin login and logout.

use secrecy::SecretString;

use emporium_api::ApiClient;
use emporium_app::login;
use emporium_app::session::{SessionStore, TokenStore};

/// Exchange credentials for a bearer token and persist it.
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    tokens: &dyn TokenStore,
    email: &str,
    password: SecretString,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = login::login(client, store, tokens, email, &password).await?;
    tracing::info!("Logged in as {} <{}>", session.name, session.email);
    Ok(())
}

/// Drop the session and remove the persisted token.
pub fn logout(
    store: &SessionStore,
    tokens: &dyn TokenStore,
) -> Result<(), Box<dyn std::error::Error>> {
    store.logout(tokens)?;
    tracing::info!("Logged out");
    Ok(())
}
