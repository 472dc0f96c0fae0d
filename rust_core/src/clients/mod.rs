pub mod sportsgameodds;

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

// Re-export commonly used types
pub use sportsgameodds::SportsGameOddsClient;

/// Read-only access to the upstream REST API.
///
/// The credential is passed on every call; implementations attach it to the
/// request and never store it.
#[async_trait]
pub trait ApiAccessor: Send + Sync {
    /// Perform a GET of `path` with `query` and return the decoded JSON body.
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        api_key: &str,
    ) -> Result<Value, TransportError>;
}
