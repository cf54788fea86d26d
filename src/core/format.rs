//! Document formats accepted on input and produced on output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Nesting accepted by the JSON parser. Deeper input is rejected before
/// conversion regardless of `max_depth`.
pub const JSON_PARSE_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn parse(&self, raw: &str) -> Result<Value> {
        match self {
            DocumentFormat::Json => serde_json::from_str(raw).map_err(json_parse_error),
            DocumentFormat::Yaml => serde_yml::from_str(raw).map_err(|e| {
                Error::validation_invalid_json(e, Some("parse YAML document".to_string()))
            }),
        }
    }

    pub fn render(&self, value: &Value) -> Result<String> {
        match self {
            DocumentFormat::Json => serde_json::to_string_pretty(value).map_err(|e| {
                Error::internal_json(e.to_string(), Some("render JSON document".to_string()))
            }),
            DocumentFormat::Yaml => serde_yml::to_string(value).map_err(|e| {
                Error::internal_json(e.to_string(), Some("render YAML document".to_string()))
            }),
        }
    }
}

fn json_parse_error(err: serde_json::Error) -> Error {
    let too_deep = err.to_string().starts_with("recursion limit exceeded");
    let error = Error::validation_invalid_json(err, Some("parse JSON document".to_string()));
    if too_deep {
        error.with_hint(format!(
            "JSON input is limited to {} nesting levels; max_depth cannot raise it",
            JSON_PARSE_DEPTH
        ))
    } else {
        error
    }
}
