//! Customer record as returned by the loyalty API.

use serde::{Deserialize, Serialize};

use super::CustomerId;

/// A customer record.
///
/// Owned by the server; the client only ever holds transient, possibly
/// stale copies fetched via search. `id` is server-assigned and immutable.
/// `points` is an integer count of accrued loyalty points and is never
/// persisted negative, though an in-progress edit may pass through a
/// negative running value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Server-assigned opaque identifier.
    pub id: CustomerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email. May be empty.
    #[serde(default)]
    pub email: String,
    /// Phone number. Required at creation, used as the public lookup key.
    #[serde(default)]
    pub phone: String,
    /// Accrued loyalty points.
    #[serde(default)]
    pub points: i64,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}
