//! Audit log entries recorded by the server for admin actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomerId, LogId};

/// The kind of admin action a log entry records.
///
/// The wire format is a plain string; unrecognized values are preserved in
/// [`LogAction::Other`] so new server-side action types render without a
/// client update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogAction {
    /// A customer record was created.
    AddCustomer,
    /// A customer record was deleted.
    DeleteCustomer,
    /// Customer fields were updated.
    UpdateCustomer,
    /// A point balance was adjusted. The only undoable action.
    ModifyPoints,
    /// Any action type this client does not recognize.
    Other(String),
}

impl LogAction {
    /// Wire representation of the action type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AddCustomer => "add_customer",
            Self::DeleteCustomer => "delete_customer",
            Self::UpdateCustomer => "update_customer",
            Self::ModifyPoints => "modify_points",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for LogAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "add_customer" => Self::AddCustomer,
            "delete_customer" => Self::DeleteCustomer,
            "update_customer" => Self::UpdateCustomer,
            "modify_points" => Self::ModifyPoints,
            _ => Self::Other(s),
        }
    }
}

impl From<LogAction> for String {
    fn from(action: LogAction) -> Self {
        action.as_str().to_owned()
    }
}

impl core::fmt::Display for LogAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One administrator action recorded by the server.
///
/// Immutable once created; the client never constructs or mutates these,
/// only reads them and optionally triggers a compensating undo for
/// point-modification entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Server-assigned entry identifier.
    pub id: LogId,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
    /// Email of the acting administrator.
    pub admin_email: String,
    /// What kind of action was taken.
    pub action_type: LogAction,
    /// The affected customer.
    pub customer_id: CustomerId,
    /// Customer name snapshot at action time, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Customer phone snapshot at action time, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    /// Free-text details about the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditLogEntry {
    /// Whether a compensating undo is available for this entry.
    ///
    /// Only point modifications are undoable.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.action_type == LogAction::ModifyPoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(action: &str) -> AuditLogEntry {
        serde_json::from_str(&format!(
            r#"{{
                "id": "log-1",
                "created_at": "2025-05-01T12:00:00Z",
                "admin_email": "admin@example.com",
                "action_type": "{action}",
                "customer_id": "c1"
            }}"#
        ))
        .expect("deserialize")
    }

    #[test]
    fn test_only_modify_points_is_undoable() {
        assert!(entry("modify_points").can_undo());
        assert!(!entry("add_customer").can_undo());
        assert!(!entry("delete_customer").can_undo());
        assert!(!entry("update_customer").can_undo());
        assert!(!entry("merge_accounts").can_undo());
    }

    #[test]
    fn test_unknown_action_roundtrips() {
        let action = LogAction::from("merge_accounts".to_owned());
        assert_eq!(action, LogAction::Other("merge_accounts".into()));
        assert_eq!(String::from(action), "merge_accounts");
    }

    #[test]
    fn test_action_display_matches_wire_format() {
        assert_eq!(LogAction::ModifyPoints.to_string(), "modify_points");
        assert_eq!(LogAction::AddCustomer.to_string(), "add_customer");
    }
}
