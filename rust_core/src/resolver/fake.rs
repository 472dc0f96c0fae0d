//! In-memory `ApiAccessor` that serves canned payloads and records calls.

use crate::clients::ApiAccessor;
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub api_key: String,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, payload: Value) -> Self {
        self.responses.insert(path.to_string(), payload);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiAccessor for FakeApi {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        api_key: &str,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            api_key: api_key.to_string(),
        });

        // Unconfigured paths behave like an upstream 404
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                path: path.to_string(),
                status: 404,
                body: "not found".to_string(),
            })
    }
}
