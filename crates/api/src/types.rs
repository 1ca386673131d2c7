//! Wire types for loyalty API requests and responses.

use serde::{Deserialize, Serialize};

/// Response body from `POST /admin/login`.
///
/// A success status with a missing or empty `token` must be treated as a
/// failed login by callers; the server has been observed to return 200 with
/// no token on partially-provisioned accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent protected calls.
    #[serde(default)]
    pub token: Option<String>,
    /// Display name of the administrator.
    #[serde(default)]
    pub username: String,
    /// Administrator email address.
    #[serde(default)]
    pub email: String,
}

/// Response body from `GET /admin/is-admin`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminCheck {
    /// Whether the presented token belongs to an administrator.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Display name of the administrator.
    #[serde(default)]
    pub username: String,
    /// Administrator email address.
    #[serde(default)]
    pub email: String,
}

/// Request body for `POST /customers`.
///
/// Only `phone` is required; optional fields are omitted from the payload
/// entirely when absent rather than sent as empty values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCustomer {
    /// Phone number, the customer's lookup key.
    pub phone: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Initial point balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// Request body for `PUT /customers/{id}`.
///
/// Carries exactly the fields that changed; absent fields are left
/// untouched by the server. An empty string for `email` or `phone` clears
/// that field explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact email, possibly empty to clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number, possibly empty to clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New notes text. Never sent empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CustomerUpdate {
    /// Whether any field is present in the payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_omits_absent_fields() {
        let body = NewCustomer {
            phone: "5550001111".into(),
            ..NewCustomer::default()
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({ "phone": "5550001111" }));
    }

    #[test]
    fn test_update_serializes_empty_strings_but_not_absent_fields() {
        let body = CustomerUpdate {
            email: Some(String::new()),
            ..CustomerUpdate::default()
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({ "email": "" }));
    }

    #[test]
    fn test_login_response_tolerates_missing_token() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"username":"Ada","email":"ada@example.com"}"#)
                .expect("deserialize");
        assert!(body.token.is_none());
    }
}
