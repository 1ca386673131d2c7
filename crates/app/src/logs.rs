//! Audit log viewing and compensating undo.

use thiserror::Error;

use emporium_api::{ApiClient, ApiError};
use emporium_core::AuditLogEntry;

/// Audit log flow failure.
#[derive(Debug, Error)]
pub enum LogsError {
    /// Fetching the log failed.
    #[error("Failed to fetch logs.")]
    FetchFailed(#[source] ApiError),

    /// The entry's action type has no compensating undo.
    #[error("Only point modifications can be undone.")]
    NotUndoable,

    /// The undo request failed.
    #[error("Undo failed.")]
    UndoFailed(#[source] ApiError),
}

/// Fetch the admin action history, newest first.
///
/// The server returns entries oldest-first; the received order is
/// explicitly reversed here rather than relying on server-side sorting.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn fetch_logs(client: &ApiClient, token: &str) -> Result<Vec<AuditLogEntry>, LogsError> {
    let mut entries = client
        .admin_logs(token)
        .await
        .map_err(LogsError::FetchFailed)?;
    entries.reverse();
    Ok(entries)
}

/// Trigger the compensating undo for `entry`.
///
/// Only `modify_points` entries are undoable; callers should refetch the
/// log afterwards. Returns the server's confirmation message.
///
/// # Errors
///
/// Returns [`LogsError::NotUndoable`] without a network call for any other
/// action type.
pub async fn undo_entry(
    client: &ApiClient,
    token: &str,
    entry: &AuditLogEntry,
) -> Result<String, LogsError> {
    if !entry.can_undo() {
        return Err(LogsError::NotUndoable);
    }

    let message = client
        .undo_log_action(token, &entry.id)
        .await
        .map_err(LogsError::UndoFailed)?;
    Ok(message.unwrap_or_else(|| "Undo completed".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(Url::parse(&server.uri()).expect("mock uri"))
    }

    fn log_json(id: &str, action: &str, ts: &str) -> serde_json::Value {
        json!({
            "id": id,
            "created_at": ts,
            "admin_email": "admin@example.com",
            "action_type": action,
            "customer_id": "c1"
        })
    }

    #[tokio::test]
    async fn test_fetch_reverses_received_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                log_json("log-1", "add_customer", "2025-05-01T10:00:00Z"),
                log_json("log-2", "modify_points", "2025-05-01T11:00:00Z"),
                log_json("log-3", "delete_customer", "2025-05-01T12:00:00Z"),
            ])))
            .mount(&server)
            .await;

        let entries = fetch_logs(&client(&server), "tok").await.expect("fetch");
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["log-3", "log-2", "log-1"]);
    }

    #[tokio::test]
    async fn test_undo_rejects_non_point_entries_without_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let entry: AuditLogEntry =
            serde_json::from_value(log_json("log-1", "add_customer", "2025-05-01T10:00:00Z"))
                .expect("entry");
        let err = undo_entry(&client(&server), "tok", &entry)
            .await
            .expect_err("should refuse");
        assert!(matches!(err, LogsError::NotUndoable));
    }

    #[tokio::test]
    async fn test_undo_defaults_message_when_server_sends_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/logs/log-2/undo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let entry: AuditLogEntry =
            serde_json::from_value(log_json("log-2", "modify_points", "2025-05-01T11:00:00Z"))
                .expect("entry");
        let message = undo_entry(&client(&server), "tok", &entry)
            .await
            .expect("undo");
        assert_eq!(message, "Undo completed");
    }
}
