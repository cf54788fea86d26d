use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Highest accepted `max_depth`. The walk recurses once per level, so this
/// keeps it well inside a 2 MiB thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

/// Which way keys are being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Camel,
    Snake,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Camel => "camel",
            Direction::Snake => "snake",
        }
    }
}

/// How elements of a sequence are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceElements {
    /// Only mapping elements are converted; everything else passes through.
    #[default]
    Mappings,
    /// Every element is recursed into, including nested sequences.
    All,
}

/// What happens when two source keys convert to the same output key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// The later key in iteration order wins.
    #[default]
    Overwrite,
    Error,
}

/// Traversal options for one conversion direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    #[serde(default)]
    pub sequences: SequenceElements,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Treat tagged date mappings as opaque leaves.
    #[serde(default = "default_keep_dates")]
    pub keep_dates: bool,

    /// Single-entry mapping keys that mark a date value.
    #[serde(default = "default_date_tags")]
    pub date_tags: Vec<String>,

    #[serde(default)]
    pub on_collision: CollisionPolicy,

    /// Emit one diagnostic line after the top-level conversion.
    #[serde(default)]
    pub trace: bool,
}

impl ConvertOptions {
    pub fn camel() -> Self {
        Self {
            sequences: SequenceElements::default(),
            max_depth: default_max_depth(),
            keep_dates: default_keep_dates(),
            date_tags: default_date_tags(),
            on_collision: CollisionPolicy::default(),
            trace: false,
        }
    }

    /// Both directions share the same built-in defaults.
    pub fn snake() -> Self {
        Self::camel()
    }

    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Camel => Self::camel(),
            Direction::Snake => Self::snake(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::config_invalid_value(
                "max_depth",
                Some("0".to_string()),
                "max_depth must be at least 1",
            ));
        }

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(Error::config_invalid_value(
                "max_depth",
                Some(self.max_depth.to_string()),
                format!("max_depth cannot exceed {}", MAX_SUPPORTED_DEPTH),
            ));
        }

        if let Some(tag) = self.date_tags.iter().find(|t| t.is_empty()) {
            return Err(Error::config_invalid_value(
                "date_tags",
                Some(tag.clone()),
                "date tags cannot be empty",
            ));
        }

        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::camel()
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_keep_dates() -> bool {
    true
}

fn default_date_tags() -> Vec<String> {
    vec!["$date".to_string()]
}
