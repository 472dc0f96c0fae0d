//! Identifier extraction from loosely-structured API collections.

use crate::error::{NotFound, ResolveError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Return the first record satisfying `predicate`, in collection order.
///
/// Several matches are not an error: the earliest one wins. No match yields
/// [`NotFound`] carrying `description`.
pub fn find_first<'a, T, I, P>(
    records: I,
    mut predicate: P,
    description: &str,
) -> std::result::Result<&'a T, NotFound>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    records
        .into_iter()
        .find(|record| predicate(*record))
        .ok_or_else(|| NotFound {
            description: description.to_string(),
        })
}

/// Parse an endpoint payload into typed records.
///
/// Accepts a bare JSON array or an object carrying the array under `data`.
pub fn parse_records<T: DeserializeOwned>(
    endpoint: &'static str,
    payload: Value,
) -> Result<Vec<T>> {
    let items = match payload {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };

    serde_json::from_value(items)
        .map_err(|source| ResolveError::MalformedPayload { endpoint, source })
}
