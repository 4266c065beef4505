use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;

/// Where the exported plain text of a document comes from.
///
/// Carried in `AppState` as `Arc<dyn DocFetcher>` so handlers can be
/// exercised against a canned fetcher in tests.
#[async_trait]
pub trait DocFetcher: Send + Sync {
    async fn fetch_plain_text(&self, doc_id: &str) -> Result<String, AppError>;
}

/// Production fetcher: hits the public Google Docs export endpoint.
/// Works only for documents shared with "Anyone with the link"; no
/// credentials are involved.
pub struct GoogleDocsFetcher {
    client: Client,
}

impl GoogleDocsFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for GoogleDocsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocFetcher for GoogleDocsFetcher {
    async fn fetch_plain_text(&self, doc_id: &str) -> Result<String, AppError> {
        let export_url = format!("https://docs.google.com/document/d/{doc_id}/export?format=txt");
        debug!("Fetching document export: {export_url}");

        let response = self
            .client
            .get(&export_url)
            .send()
            .await
            .map_err(|e| AppError::DocFetch(format!("Export request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DocFetch(format!(
                "Failed to fetch document: {status}. Make sure the document is shared with 'Anyone with the link'"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::DocFetch(format!("Failed to read export body: {e}")))
    }
}
