//! Semantic Scholar title resolution and metadata fetching.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::models::{ExternalId, PaperRecord};
use crate::sources::SourceError;

/// Fields requested from the record endpoint
const RECORD_FIELDS: &str = "title,url,year,externalIds";

/// Client for the Semantic Scholar Graph API.
///
/// Wraps the two lookups the pipeline needs: free-text search used to resolve
/// a title to a paper identifier, and record retrieval used to fetch the
/// paper's canonical title and external identifiers. Every request is
/// followed by a fixed delay; this is the only rate limiting performed.
#[derive(Debug, Clone)]
pub struct SemanticScholarClient {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    delay: Duration,
}

impl SemanticScholarClient {
    /// Create a new client from the given configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            delay: Duration::from_secs(config.delay_secs),
        })
    }

    /// Add API key to request headers if available
    fn add_api_key_if_present(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref key) = self.api_key {
            builder.header("x-api-key", key)
        } else {
            builder
        }
    }

    /// Wait the fixed inter-request delay
    async fn pace(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Resolve a paper title to a Semantic Scholar paper identifier.
    ///
    /// The query is lower-cased and percent-encoded for the search request,
    /// but matching is exact and case-sensitive against the original title.
    /// Results are scanned in API relevance order and the first exact match
    /// wins; only the first page of results is considered.
    pub async fn resolve_title(&self, title: &str) -> Result<String, SourceError> {
        let url = format!(
            "{}/paper/search?query={}",
            self.api_base,
            urlencoding::encode(&title.to_lowercase())
        );
        debug!(%title, "searching");

        let response = self
            .add_api_key_if_present(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search Semantic Scholar: {}", e)))?;
        self.pace().await;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Semantic Scholar API returned status: {}",
                response.status()
            )));
        }

        let data: S2SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse JSON: {}", e)))?;

        for hit in &data.data {
            if hit.title.as_deref() == Some(title) {
                if let Some(id) = &hit.paper_id {
                    return Ok(id.clone());
                }
            }
        }

        Err(SourceError::Unresolved(title.to_string()))
    }

    /// Fetch the canonical record for a resolved paper identifier.
    ///
    /// Returns the record's title paired with its DOI when one is present,
    /// or with the full external-identifiers value otherwise.
    pub async fn fetch_record(&self, paper_id: &str) -> Result<PaperRecord, SourceError> {
        let url = format!(
            "{}/paper/{}?fields={}",
            self.api_base,
            urlencoding::encode(paper_id),
            RECORD_FIELDS
        );
        debug!(%paper_id, "fetching record");

        let response = self
            .add_api_key_if_present(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch paper: {}", e)))?;
        self.pace().await;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Semantic Scholar API returned status: {}",
                response.status()
            )));
        }

        let data: S2PaperRecord = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse JSON: {}", e)))?;

        let title = data
            .title
            .ok_or_else(|| SourceError::MetadataIncomplete(paper_id.to_string()))?;

        Ok(PaperRecord::new(
            title,
            ExternalId::from_external_ids(data.external_ids),
        ))
    }
}

// ===== Semantic Scholar API Types =====

#[derive(Debug, Deserialize)]
struct S2SearchResponse {
    data: Vec<S2SearchHit>,
}

#[derive(Debug, Deserialize)]
struct S2SearchHit {
    #[serde(rename = "paperId")]
    paper_id: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct S2PaperRecord {
    title: Option<String>,
    #[serde(rename = "externalIds")]
    external_ids: Option<serde_json::Value>,
}
