//! Public points lookup by phone number.

use thiserror::Error;

use emporium_api::ApiClient;
use emporium_core::Eligibility;

/// Minimum phone length before the lookup action is offered. A coarse
/// gate, not a format check.
pub const MIN_LOOKUP_PHONE_LEN: usize = 10;

/// Whether a phone string is long enough to submit for lookup.
#[must_use]
pub fn phone_is_lookupable(phone: &str) -> bool {
    phone.len() >= MIN_LOOKUP_PHONE_LEN
}

/// A successful lookup: the raw balance and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBalance {
    /// Accrued loyalty points.
    pub points: i64,
    /// Reward eligibility derived from the balance.
    pub eligibility: Eligibility,
}

/// Lookup failure. Not-found and transport errors are deliberately not
/// distinguished for the end user.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The phone number did not resolve to a balance.
    #[error("Could not find customer with that phone number.")]
    NotFound,
}

/// Look up a points balance. No credential required.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] for any failure, whether the customer
/// is unknown or the request itself failed.
pub async fn check_points(client: &ApiClient, phone: &str) -> Result<PointsBalance, LookupError> {
    match client.lookup_points(phone).await {
        Ok(points) => Ok(PointsBalance {
            points,
            eligibility: Eligibility::from_points(points),
        }),
        Err(err) => {
            tracing::debug!(error = %err, "points lookup failed");
            Err(LookupError::NotFound)
        }
    }
}
