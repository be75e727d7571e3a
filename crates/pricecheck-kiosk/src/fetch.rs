//! # Product Fetcher
//!
//! The lookup collaborator: search term in, product record out.
//!
//! ## HTTP Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET {base_url}/{percent-encoded term}      single attempt, no retry    │
//! │                                                                         │
//! │  200 + object        → normalize_keys → ProductRecord                   │
//! │  200 + null / false  → ProductNotFound                                  │
//! │  200 + other JSON    → Decode                                           │
//! │  404                 → ProductNotFound                                  │
//! │  other status        → HttpStatus ("HTTP error! status: N")             │
//! │  no response         → Transport                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use pricecheck_core::{normalize_keys, ProductRecord};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::KioskConfig;
use crate::error::{KioskError, KioskResult};

/// Looks up a product by item code, barcode or subcode.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// One lookup attempt. Not-found is an error, not an empty success.
    async fn fetch(&self, term: &str) -> KioskResult<ProductRecord>;
}

// =============================================================================
// HTTP Fetcher
// =============================================================================

/// Product lookup over the kiosk HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductFetcher {
    /// Builds a fetcher for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> KioskResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(KioskError::InvalidUrl(format!(
                "API URL cannot take a path: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| KioskError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(HttpProductFetcher { client, base_url })
    }

    pub fn from_config(config: &KioskConfig) -> KioskResult<Self> {
        Self::new(&config.api.base_url, config.request_timeout())
    }

    /// URL for one lookup: the term becomes a single encoded path segment.
    pub fn lookup_url(&self, term: &str) -> KioskResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| KioskError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(term);
        Ok(url)
    }
}

#[async_trait]
impl ProductFetcher for HttpProductFetcher {
    async fn fetch(&self, term: &str) -> KioskResult<ProductRecord> {
        let url = self.lookup_url(term)?;
        debug!(%url, "Fetching product");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        info!(term = %term, status = status.as_u16(), "Product lookup answered");

        check_status(status, term)?;
        let body: Value = response.json().await?;
        decode_body(body, term)
    }
}

/// Maps a non-success status to the matching lookup error.
pub fn check_status(status: StatusCode, term: &str) -> KioskResult<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(KioskError::ProductNotFound(term.to_string()));
    }
    if !status.is_success() {
        return Err(KioskError::HttpStatus(status.as_u16()));
    }
    Ok(())
}

/// Normalizes and decodes a success body.
pub fn decode_body(body: Value, term: &str) -> KioskResult<ProductRecord> {
    ProductRecord::from_json(normalize_keys(body))?
        .ok_or_else(|| KioskError::ProductNotFound(term.to_string()))
}
