//! Environment configuration for the first-half odds service.
//!
//! - SPORTSGAMEODDS_API_KEY: API credential (required)
//! - SPORTSGAMEODDS_BASE_URL: API root, defaults to the production v1 API
//! - SPORTSGAMEODDS_TIMEOUT_SECS: per-request timeout, defaults to 10s

use anyhow::{anyhow, Result};
use sgo_rust_core::clients::sportsgameodds::SPORTSGAMEODDS_API;
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "SPORTSGAMEODDS_API_KEY";
pub const BASE_URL_VAR: &str = "SPORTSGAMEODDS_BASE_URL";
pub const TIMEOUT_VAR: &str = "SPORTSGAMEODDS_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Redact API key - show only last 4 chars for identification
        let key_suffix = if self.api_key.len() > 4 {
            self.api_key.get(self.api_key.len() - 4..).unwrap_or("****")
        } else {
            "****"
        };
        f.debug_struct("Config")
            .field("api_key", &format!("...{}", key_suffix))
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Please set the {} environment variable before running",
                    API_KEY_VAR
                )
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| SPORTSGAMEODDS_API.to_string());

        let timeout_secs = lookup(TIMEOUT_VAR)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(1, 120);

        Ok(Self {
            api_key,
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "abcd1234")])).unwrap();
        assert_eq!(config.api_key, "abcd1234");
        assert_eq!(config.base_url, SPORTSGAMEODDS_API);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_api_key() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).is_err());
    }

    #[test]
    fn test_overrides_and_clamp() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "k"),
            (BASE_URL_VAR, "http://localhost:8080/v1"),
            (TIMEOUT_VAR, "900"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(120));

        let config =
            Config::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "abc")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config =
            Config::from_lookup(lookup_from(&[(API_KEY_VAR, "super-secret-9876")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("...9876"));
        assert!(!debug.contains("super-secret"));
    }
}
