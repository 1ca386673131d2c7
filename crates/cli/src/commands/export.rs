//! Customer CSV export.

use std::io::Write;
use std::path::PathBuf;

use emporium_api::ApiClient;
use emporium_app::export;

/// Fetch the customer CSV and write it to `output`, or stdout when no
/// path was given.
pub async fn run(
    client: &ApiClient,
    token: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let csv = export::export_customers(client, token).await?;

    match output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            tracing::info!("Exported customers to {}", path.display());
        }
        None => {
            std::io::stdout().write_all(csv.as_bytes())?;
        }
    }
    Ok(())
}
