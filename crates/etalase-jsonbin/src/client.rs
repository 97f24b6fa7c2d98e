//! HTTP client for the `JSONBin` v3 REST API.
//!
//! Wraps `reqwest` with the store's header-based credential scheme and
//! typed error handling. Only the read path is used: the service never
//! writes to the bin.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::JsonbinError;

const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3";

/// Client for one `JSONBin` bin.
///
/// Holds the HTTP client, the master key, and the bin identifier. Use
/// [`BinClient::new`] for production or [`BinClient::with_base_url`] to
/// point at a mock server in tests.
pub struct BinClient {
    client: Client,
    api_key: String,
    bin_id: String,
    base_url: Url,
}

impl BinClient {
    /// Creates a new client pointed at the production `JSONBin` API.
    ///
    /// # Errors
    ///
    /// Returns [`JsonbinError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, bin_id: &str, timeout_secs: u64) -> Result<Self, JsonbinError> {
        Self::with_base_url(api_key, bin_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`JsonbinError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`JsonbinError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        bin_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, JsonbinError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("etalase/0.1 (catalog-service)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the bin path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| JsonbinError::InvalidBaseUrl {
                base_url: normalised.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            bin_id: bin_id.to_owned(),
            base_url,
        })
    }

    /// Fetches the latest version of the inventory record.
    ///
    /// Calls `GET {base}/b/{bin_id}/latest` with the master key in
    /// `X-Master-Key` and `X-Bin-Meta: false` so the store returns the bare
    /// record without its metadata wrapper. Some bin configurations ignore
    /// the meta header and wrap the record anyway; callers should run the
    /// body through [`crate::decode_inventory`], which accepts both shapes.
    ///
    /// # Errors
    ///
    /// - [`JsonbinError::UnexpectedStatus`] on a non-2xx response.
    /// - [`JsonbinError::Http`] on network failure.
    /// - [`JsonbinError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_latest(&self) -> Result<serde_json::Value, JsonbinError> {
        let url = self.latest_url()?;

        let response = self
            .client
            .get(url.clone())
            .header("X-Master-Key", &self.api_key)
            .header("X-Bin-Meta", "false")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JsonbinError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| JsonbinError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Builds the `/b/{bin_id}/latest` URL off the stored base.
    fn latest_url(&self) -> Result<Url, JsonbinError> {
        self.base_url
            .join(&format!("b/{}/latest", self.bin_id))
            .map_err(|e| JsonbinError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
