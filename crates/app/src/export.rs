//! CSV export of the full customer list.

use thiserror::Error;

use emporium_api::{ApiClient, ApiError};

/// Export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export request failed.
    #[error("Export failed.")]
    Failed(#[source] ApiError),
}

/// Fetch the customer list as CSV text. The server builds the document;
/// the payload is passed through untouched.
///
/// # Errors
///
/// Returns [`ExportError::Failed`] if the request fails or the token is
/// rejected.
pub async fn export_customers(client: &ApiClient, token: &str) -> Result<String, ExportError> {
    client
        .export_customers(token)
        .await
        .map_err(ExportError::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_export_passes_csv_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/export-customers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("name,phone,points\nAda,5550001111,250\n"),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(Url::parse(&server.uri()).expect("mock uri"));
        let csv = export_customers(&client, "tok").await.expect("export");
        assert!(csv.starts_with("name,phone,points"));
    }
}
