//! Public points lookup. No login required.

use emporium_api::ApiClient;
use emporium_app::lookup::{self, MIN_LOOKUP_PHONE_LEN};

/// Look up a points balance by phone number and report eligibility.
pub async fn run(client: &ApiClient, phone: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !lookup::phone_is_lookupable(phone) {
        return Err(format!("Phone number must be at least {MIN_LOOKUP_PHONE_LEN} characters").into());
    }

    let balance = lookup::check_points(client, phone).await?;
    tracing::info!("Points balance: {}", balance.points);
    tracing::info!("{}", balance.eligibility);
    Ok(())
}
