//! Audit log viewing and undo.

use emporium_api::ApiClient;
use emporium_app::logs;
use emporium_core::LogId;

/// Print the admin action history, newest first.
pub async fn list(client: &ApiClient, token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let entries = logs::fetch_logs(client, token).await?;

    tracing::info!("{} log entr(ies)", entries.len());
    for entry in &entries {
        let subject = entry
            .customer_name
            .as_deref()
            .or(entry.customer_phone.as_deref())
            .unwrap_or(entry.customer_id.as_str());
        tracing::info!(
            "  {} | {} | {} on {} by {}{}",
            entry.id,
            entry.created_at,
            entry.action_type,
            subject,
            entry.admin_email,
            if entry.can_undo() { " (undoable)" } else { "" }
        );
        if let Some(details) = &entry.details {
            tracing::info!("    {details}");
        }
    }
    Ok(())
}

/// Undo a point modification by log entry ID.
pub async fn undo(
    client: &ApiClient,
    token: &str,
    log_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = LogId::from(log_id);
    let entries = logs::fetch_logs(client, token).await?;
    let entry = entries
        .iter()
        .find(|entry| entry.id == id)
        .ok_or("No log entry with that ID")?;

    let message = logs::undo_entry(client, token, entry).await?;
    tracing::info!("{message}");
    Ok(())
}
