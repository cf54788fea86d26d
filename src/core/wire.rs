//! Typed helpers for API clients.
//!
//! Internal types use camelCase field names (`#[serde(rename_all = "camelCase")]`),
//! wire payloads use snake_case. These helpers cross that boundary.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::convert::KeyCaser;
use crate::error::{Error, Result};

/// Serialize `value` and snake-case its keys for an outgoing request body.
pub fn encode_snake<T: Serialize>(value: &T) -> Result<Value> {
    let raw = serde_json::to_value(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize request".to_string())))?;
    KeyCaser::snake().convert(&raw)
}

/// Camel-case the keys of a response payload and deserialize it.
pub fn decode_camel<T: DeserializeOwned>(value: &Value) -> Result<T> {
    let converted = KeyCaser::camel().convert(value)?;
    serde_json::from_value(converted).map_err(|e| {
        Error::validation_invalid_json(e, Some("deserialize response".to_string()))
    })
}
