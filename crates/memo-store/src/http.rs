//! HTTP client for the managed document-store facade.

use memo_types::{AttributeBag, AttributeStore, AttributeStoreError};
use reqwest::StatusCode;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// AttributeStore backed by a document-store REST facade:
/// `GET {base}/{user_id}` returns the stored bag (404 when none stored yet),
/// `PUT {base}/{user_id}` replaces it. The collaborator owns table creation
/// and consistency.
pub struct HttpAttributeStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAttributeStore {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, AttributeStoreError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| AttributeStoreError::Other(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Reads `MEMO_STORE_URL` (required) and `MEMO_STORE_API_KEY` (optional
    /// bearer token).
    pub fn from_env() -> Result<Self, AttributeStoreError> {
        let base_url = std::env::var("MEMO_STORE_URL")
            .map_err(|_| AttributeStoreError::Other("MEMO_STORE_URL is not set".to_string()))?;
        let api_key = std::env::var("MEMO_STORE_API_KEY").ok();
        Self::new(base_url, api_key)
    }

    fn item_url(&self, user_id: &str) -> String {
        format!("{}/{}", self.base_url, user_id)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key {
            Some(ref key) => req.bearer_auth(key),
            None => req,
        }
    }

    fn map_status(status: StatusCode, body: String) -> AttributeStoreError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => AttributeStoreError::Throttled(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AttributeStoreError::PermissionDenied(body)
            }
            _ => AttributeStoreError::Other(format!("document store error {}: {}", status, body)),
        }
    }

    fn map_transport(e: reqwest::Error) -> AttributeStoreError {
        if e.is_timeout() {
            AttributeStoreError::Timeout(e.to_string())
        } else {
            AttributeStoreError::Other(e.to_string())
        }
    }
}

#[async_trait::async_trait]
impl AttributeStore for HttpAttributeStore {
    async fn load(&self, user_id: &str) -> Result<AttributeBag, AttributeStoreError> {
        let req = self.authorize(self.client.get(self.item_url(user_id)));
        let res = req.send().await.map_err(Self::map_transport)?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(AttributeBag::default());
        }
        let status = res.status();
        let body = res.text().await.map_err(Self::map_transport)?;
        if !status.is_success() {
            return Err(Self::map_status(status, body));
        }
        serde_json::from_str(&body)
            .map_err(|e| AttributeStoreError::Other(format!("malformed stored document: {}", e)))
    }

    async fn save(&self, user_id: &str, bag: &AttributeBag) -> Result<(), AttributeStoreError> {
        let req = self.authorize(self.client.put(self.item_url(user_id)).json(bag));
        let res = req.send().await.map_err(Self::map_transport)?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Self::map_status(status, body));
        }
        Ok(())
    }
}
