//! Administrator session identity.

use serde::{Deserialize, Serialize};

/// The authenticated administrator identity and bearer credential.
///
/// Created on successful login or successful token validation; destroyed on
/// explicit logout or failed validation. The token is non-empty while the
/// session is considered authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Display name of the administrator.
    pub name: String,
    /// Administrator email address.
    pub email: String,
    /// Opaque bearer credential sent on every protected call.
    pub token: String,
}

impl AdminSession {
    /// Whether this session carries a usable credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
