use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::{CollisionPolicy, ConvertOptions, Direction, SequenceElements};
use crate::utils::io;

/// Root structure of a keycase options file.
///
/// ```json
/// { "snake": { "max_depth": 64 }, "camel": { "sequences": "all" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeycaseConfig {
    #[serde(default)]
    pub camel: OptionOverrides,

    #[serde(default)]
    pub snake: OptionOverrides,
}

/// Per-direction overrides. Unset fields keep the built-in direction default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequences: Option<SequenceElements>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_dates: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_collision: Option<CollisionPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<bool>,
}

impl OptionOverrides {
    /// Layer `self` on top of `base`; set fields win.
    pub fn apply(&self, mut base: ConvertOptions) -> ConvertOptions {
        if let Some(sequences) = self.sequences {
            base.sequences = sequences;
        }
        if let Some(max_depth) = self.max_depth {
            base.max_depth = max_depth;
        }
        if let Some(keep_dates) = self.keep_dates {
            base.keep_dates = keep_dates;
        }
        if let Some(date_tags) = &self.date_tags {
            base.date_tags = date_tags.clone();
        }
        if let Some(on_collision) = self.on_collision {
            base.on_collision = on_collision;
        }
        if let Some(trace) = self.trace {
            base.trace = trace;
        }
        base
    }
}

impl KeycaseConfig {
    pub fn overrides(&self, direction: Direction) -> &OptionOverrides {
        match direction {
            Direction::Camel => &self.camel,
            Direction::Snake => &self.snake,
        }
    }

    /// Built-in defaults for `direction` with this config applied.
    pub fn options(&self, direction: Direction) -> Result<ConvertOptions> {
        let options = self
            .overrides(direction)
            .apply(ConvertOptions::for_direction(direction));
        options.validate()?;
        Ok(options)
    }
}

/// Load a config file. Unlike the built-in defaults, a missing or malformed
/// file is an error: the caller asked for it explicitly.
pub fn load_config(path: &Path) -> Result<KeycaseConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: KeycaseConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    for direction in [Direction::Camel, Direction::Snake] {
        config.options(direction)?;
    }

    Ok(config)
}
