//! Customer create and delete.

use thiserror::Error;

use emporium_api::{ApiClient, ApiError, NewCustomer};
use emporium_core::CustomerId;

/// Input form for creating a customer. Only `phone` is required.
#[derive(Debug, Clone, Default)]
pub struct AddCustomerForm {
    /// Display name, optional.
    pub name: String,
    /// Phone number, required.
    pub phone: String,
    /// Contact email, optional.
    pub email: String,
    /// Free-text notes, optional.
    pub notes: String,
    /// Initial point balance, optional.
    pub points: i64,
}

impl AddCustomerForm {
    /// Build the create payload, including optional fields only when they
    /// carry a value (non-empty strings, non-zero points).
    ///
    /// # Errors
    ///
    /// Returns [`AddError::PhoneRequired`] if the phone trims to empty.
    pub fn into_payload(self) -> Result<NewCustomer, AddError> {
        if self.phone.trim().is_empty() {
            return Err(AddError::PhoneRequired);
        }

        Ok(NewCustomer {
            phone: self.phone,
            name: Some(self.name).filter(|s| !s.is_empty()),
            email: Some(self.email).filter(|s| !s.is_empty()),
            notes: Some(self.notes).filter(|s| !s.is_empty()),
            points: Some(self.points).filter(|p| *p != 0),
        })
    }
}

/// Create failure.
#[derive(Debug, Error)]
pub enum AddError {
    /// The form had no phone number; nothing was sent.
    #[error("Phone number is required.")]
    PhoneRequired,

    /// The server rejected the creation with its own message, surfaced
    /// verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request failed without a server-provided message.
    #[error("Add customer failed.")]
    Failed(#[source] ApiError),
}

/// Create a customer record.
///
/// # Errors
///
/// Validation happens before any network call; server rejections surface
/// their message verbatim when available.
pub async fn add_customer(
    client: &ApiClient,
    token: &str,
    form: AddCustomerForm,
) -> Result<(), AddError> {
    let payload = form.into_payload()?;
    client
        .create_customer(token, &payload)
        .await
        .map_err(|err| match err {
            ApiError::Server(message) => AddError::Rejected(message),
            other => AddError::Failed(other),
        })
}

/// Delete failure.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The lookup value matched no customer (or the search itself failed).
    #[error("Customer not found.")]
    NotFound,

    /// The delete request failed after a match was resolved.
    #[error("Delete failed.")]
    Failed(#[source] ApiError),
}

/// Delete a customer by a free-text lookup value (phone or email).
///
/// Resolves the identifier by searching for `value` and taking the first
/// match - no disambiguation when several match, and no confirmation step.
///
/// # Errors
///
/// Returns [`DeleteError::NotFound`] when nothing matched, or
/// [`DeleteError::Failed`] when the delete itself was rejected.
pub async fn delete_customer(
    client: &ApiClient,
    token: &str,
    value: &str,
) -> Result<CustomerId, DeleteError> {
    let matches = client
        .search_customers(token, value)
        .await
        .map_err(|err| {
            tracing::debug!(error = %err, "delete lookup failed");
            DeleteError::NotFound
        })?;

    let Some(first) = matches.into_iter().next() else {
        return Err(DeleteError::NotFound);
    };

    client
        .delete_customer(token, &first.id)
        .await
        .map_err(DeleteError::Failed)?;
    Ok(first.id)
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

    #[test]
    fn test_payload_includes_only_populated_fields() {
        let form = AddCustomerForm {
            phone: "5550001111".into(),
            name: "Ada".into(),
            ..AddCustomerForm::default()
        };
        let payload = form.into_payload().expect("payload");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json, json!({ "phone": "5550001111", "name": "Ada" }));
    }

    #[test]
    fn test_zero_initial_points_are_omitted() {
        let form = AddCustomerForm {
            phone: "5550001111".into(),
            points: 0,
            ..AddCustomerForm::default()
        };
        let payload = form.into_payload().expect("payload");
        assert!(payload.points.is_none());
    }

    #[test]
    fn test_blank_phone_fails_before_any_network_call() {
        let form = AddCustomerForm {
            phone: "   ".into(),
            ..AddCustomerForm::default()
        };
        let err = form.into_payload().expect_err("should fail");
        assert_eq!(err.to_string(), "Phone number is required.");
    }

    #[tokio::test]
    async fn test_server_rejection_surfaces_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({ "error": "Phone exists" })),
            )
            .mount(&server)
            .await;

        let form = AddCustomerForm {
            phone: "5550001111".into(),
            ..AddCustomerForm::default()
        };
        let err = add_customer(&client(&server), "tok", form)
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Phone exists");
    }

    #[tokio::test]
    async fn test_delete_resolves_first_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "c7", "name": "Ada", "email": "", "phone": "5550001111",
                  "points": 0, "notes": "" },
                { "id": "c8", "name": "Ada Too", "email": "", "phone": "5550001111",
                  "points": 0, "notes": "" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/customers/c7"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let id = delete_customer(&client(&server), "tok", "5550001111")
            .await
            .expect("delete");
        assert_eq!(id.as_str(), "c7");
    }

    #[tokio::test]
    async fn test_delete_with_no_matches_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = delete_customer(&client(&server), "tok", "nobody")
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Customer not found.");
    }
}
