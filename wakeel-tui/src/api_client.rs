//! REST client for the list endpoints.

use crate::config::TuiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use wakeel_core::{ListRecord, LoadOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Anything that can serve a JSON document for an endpoint path.
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, ApiClientError>;
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        Self::with_timeout(
            &config.api_base_url,
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(url).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl ListSource for RestClient {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, ApiClientError> {
        self.get_json(path).await
    }
}

/// One retrieval attempt for `T::ENDPOINT`. Transport errors, non-success
/// statuses and bodies that are not an array of `T` all yield the seed.
pub async fn retrieve<T>(source: &dyn ListSource, seed: Vec<T>) -> LoadOutcome<T>
where
    T: ListRecord + DeserializeOwned,
{
    let result = match source.fetch(T::ENDPOINT).await {
        Ok(value) => serde_json::from_value::<Vec<T>>(value).map_err(ApiClientError::from),
        Err(err) => Err(err),
    };
    match &result {
        Ok(items) => {
            tracing::info!(endpoint = T::ENDPOINT, count = items.len(), "List retrieved");
        }
        Err(err) => {
            tracing::warn!(
                endpoint = T::ENDPOINT,
                error = %err,
                fallback = seed.len(),
                "List retrieval failed, showing fallback data"
            );
        }
    }
    LoadOutcome::from_result(result, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use wakeel_core::{Document, Lawyer, Provenance};

    struct CannedSource(HashMap<&'static str, serde_json::Value>);

    #[async_trait]
    impl ListSource for CannedSource {
        async fn fetch(&self, path: &str) -> Result<serde_json::Value, ApiClientError> {
            self.0.get(path).cloned().ok_or(ApiClientError::Status {
                status: 404,
                body: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_retrieve_remote_on_valid_array() {
        let source = CannedSource(HashMap::from([(
            "/api/documents",
            json!([{ "title": "a", "type": "PDF" }]),
        )]));
        let outcome = retrieve::<Document>(&source, Document::seed()).await;
        assert_eq!(outcome, LoadOutcome::Remote(vec![Document::new("a", "PDF")]));
    }

    #[tokio::test]
    async fn test_retrieve_fallback_on_error() {
        let source = CannedSource(HashMap::new());
        let outcome = retrieve::<Lawyer>(&source, Lawyer::seed()).await;
        assert_eq!(outcome.provenance(), Provenance::Fallback);
        assert_eq!(outcome, LoadOutcome::Fallback(Lawyer::seed()));
    }

    #[tokio::test]
    async fn test_retrieve_fallback_on_wrong_shape() {
        let source = CannedSource(HashMap::from([(
            "/api/lawyers",
            json!({ "lawyers": [] }),
        )]));
        let outcome = retrieve::<Lawyer>(&source, Lawyer::seed()).await;
        assert_eq!(outcome.provenance(), Provenance::Fallback);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            RestClient::with_timeout("http://localhost:8080/", Duration::from_millis(50)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
