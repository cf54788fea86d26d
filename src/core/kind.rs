//! Node classification.
//!
//! Every value the traversal meets is sorted into exactly one [`NodeKind`].
//! Mappings that carry a tagged date (`{"$date": "2024-01-01T00:00:00Z"}`)
//! are leaves, never mappings, when `keep_dates` is set.

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{Map, Value};

use crate::options::ConvertOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Leaf,
}

pub fn classify(value: &Value, options: &ConvertOptions) -> NodeKind {
    match value {
        Value::Object(map) if options.keep_dates && is_tagged_date(map, &options.date_tags) => {
            NodeKind::Leaf
        }
        Value::Object(_) => NodeKind::Mapping,
        Value::Array(_) => NodeKind::Sequence,
        _ => NodeKind::Leaf,
    }
}

/// True for a single-entry mapping whose key is one of `tags` and whose value
/// is an RFC 3339 timestamp or integer epoch milliseconds.
pub fn is_tagged_date(map: &Map<String, Value>, tags: &[String]) -> bool {
    if map.len() != 1 {
        return false;
    }

    let Some((key, payload)) = map.iter().next() else {
        return false;
    };

    if !tags.iter().any(|tag| tag == key) {
        return false;
    }

    match payload {
        Value::String(s) => DateTime::<FixedOffset>::parse_from_rfc3339(s).is_ok(),
        Value::Number(n) => n
            .as_i64()
            .is_some_and(|millis| DateTime::<Utc>::from_timestamp_millis(millis).is_some()),
        _ => false,
    }
}
