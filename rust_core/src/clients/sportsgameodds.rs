//! SportsGameOdds REST client.
//!
//! Thin GET-and-decode transport over reqwest. Authentication is a single
//! `x-api-key` header supplied per request by the caller.

use super::ApiAccessor;
use crate::error::TransportError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const SPORTSGAMEODDS_API: &str = "https://api.sportsgameodds.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "x-api-key";

/// Error bodies are truncated to this many characters
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Clone)]
pub struct SportsGameOddsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for SportsGameOddsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SportsGameOddsClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SportsGameOddsClient {
    /// Client for the production API with the default 10s request timeout.
    pub fn new() -> reqwest::Result<Self> {
        Self::with_base_url(SPORTSGAMEODDS_API, DEFAULT_TIMEOUT)
    }

    /// Client for an arbitrary base URL (staging, local mock server).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiAccessor for SportsGameOddsClient {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        api_key: &str,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!("SportsGameOdds API error: {} {} - {}", path, status, text);
            return Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                path: path.to_string(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
