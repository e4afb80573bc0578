//! JSON parser for the NeoWs feed payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NeoError, Result};

/// Top-level key holding the date-grouped asteroid lists.
pub const GROUPING_KEY: &str = "near_earth_objects";

/// The feed exactly as the provider sent it.
///
/// `near_earth_objects` maps an ISO date to the entries grouped under it, in
/// the provider's document order. The whole top-level object is kept as
/// received, so serializing the envelope reproduces the provider's key order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RawFeedEnvelope {
    root: Map<String, Value>,
}

impl RawFeedEnvelope {
    fn groups(&self) -> Option<&Map<String, Value>> {
        self.root.get(GROUPING_KEY).and_then(Value::as_object)
    }

    /// Date buckets in provider order. Each bucket is guaranteed to be an array.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.groups().into_iter().flatten().map(|(date, entries)| {
            let entries = entries.as_array().map(Vec::as_slice).unwrap_or_default();
            (date.as_str(), entries)
        })
    }

    /// Number of date buckets.
    pub fn bucket_count(&self) -> usize {
        self.groups().map_or(0, Map::len)
    }

    /// Total entries across every bucket.
    pub fn entry_count(&self) -> usize {
        self.buckets().map(|(_, entries)| entries.len()).sum()
    }

    /// Top-level field other than the grouping key, e.g. `element_count`.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        if key == GROUPING_KEY {
            return None;
        }
        self.root.get(key)
    }
}

impl Serialize for RawFeedEnvelope {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl TryFrom<Value> for RawFeedEnvelope {
    type Error = NeoError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(NeoError::FeedFormat(
                "payload is not a JSON object".to_string(),
            ));
        };

        let near_earth_objects = match root.get(GROUPING_KEY) {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(NeoError::FeedFormat(format!(
                    "'{GROUPING_KEY}' is not an object"
                )));
            }
            None => {
                return Err(NeoError::FeedFormat(format!(
                    "missing '{GROUPING_KEY}'"
                )));
            }
        };

        if let Some((date, _)) = near_earth_objects.iter().find(|(_, v)| !v.is_array()) {
            return Err(NeoError::FeedFormat(format!(
                "bucket '{date}' is not an array"
            )));
        }

        Ok(Self { root })
    }
}

/// Decodes a NeoWs feed payload and locates its date-grouped collection.
///
/// # Errors
///
/// Returns [`NeoError::FeedFormat`] if the bytes are not JSON or the
/// grouping key is absent or mis-shaped. There is no best-effort parse.
pub fn parse_feed(bytes: &[u8]) -> Result<RawFeedEnvelope> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| NeoError::FeedFormat(format!("invalid JSON: {e}")))?;
    RawFeedEnvelope::try_from(value)
}
