use super::{ContentError, ContentId};
use crate::{ContentApiConfig, locale::Locale};
use async_trait::async_trait;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tracing::debug;

/// Anything that can hand back the raw JSON body for a content record.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_raw(&self, id: &ContentId, locale: Locale) -> Result<Value, ContentError>;
    fn name(&self) -> &str;
}

pub type DynContentSource = Arc<dyn ContentSource>;

/// `GET {base_url}/content/{id}?lang={code}` over reqwest.
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(config: &ContentApiConfig) -> Result<Self, ContentError> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| ContentError::NetworkFailure(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, id: &ContentId, locale: Locale) -> String {
        format!(
            "{}/content/{}?lang={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            locale.api_code()
        )
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_raw(&self, id: &ContentId, locale: Locale) -> Result<Value, ContentError> {
        let url = self.endpoint(id, locale);
        debug!("Fetching content record from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::NetworkFailure(format!(
                "HTTP {} from {}",
                status, url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentError::NetworkFailure(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| ContentError::InvalidResponseShape(format!("malformed JSON: {}", e)))
    }

    fn name(&self) -> &str {
        "HTTP Content API"
    }
}

/// In-memory records keyed by id, the same body for every locale.
#[derive(Default)]
pub struct MemoryContentSource {
    records: HashMap<ContentId, Value>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: impl Into<ContentId>, body: Value) -> Self {
        self.records.insert(id.into(), body);
        self
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn fetch_raw(&self, id: &ContentId, _locale: Locale) -> Result<Value, ContentError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| ContentError::NetworkFailure(format!("HTTP 404 for content {}", id)))
    }

    fn name(&self) -> &str {
        "In-Memory Content"
    }
}
