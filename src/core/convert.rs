//! Recursive key renaming.
//!
//! A [`KeyCaser`] rebuilds a borrowed `serde_json::Value` tree with every
//! mapping key passed through its [`KeyCaseConverter`]. The input is never
//! touched; every mapping and sequence in the output is freshly allocated.
//!
//! Dispatch at each node goes through [`classify`], so tagged dates and other
//! leaves are decided in one place. Non-mapping input is returned unchanged at
//! every level, the top level included.

use serde_json::{Map, Value};

use crate::case::{CamelCase, KeyCaseConverter, SnakeCase};
use crate::error::{Error, Result};
use crate::kind::{classify, NodeKind};
use crate::options::{CollisionPolicy, ConvertOptions, SequenceElements};

#[derive(Debug, Clone)]
pub struct KeyCaser<C> {
    converter: C,
    options: ConvertOptions,
}

impl KeyCaser<CamelCase> {
    pub fn camel() -> Self {
        Self::new(CamelCase, ConvertOptions::camel())
    }
}

impl KeyCaser<SnakeCase> {
    pub fn snake() -> Self {
        Self::new(SnakeCase, ConvertOptions::snake())
    }
}

impl<C: KeyCaseConverter> KeyCaser<C> {
    pub fn new(converter: C, options: ConvertOptions) -> Self {
        Self { converter, options }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, value: &Value) -> Result<Value> {
        self.options.validate()?;

        let mut walk = Walk {
            caser: self,
            path: Vec::new(),
        };
        let converted = walk.node(value, 1)?;

        if self.options.trace {
            log_status!(
                "trace",
                "{} end {} <- {}",
                self.converter.name(),
                converted,
                value
            );
        }

        Ok(converted)
    }
}

/// Camel-case every mapping key in `value` with the default camel options.
pub fn to_camel_case(value: &Value) -> Result<Value> {
    KeyCaser::camel().convert(value)
}

/// Snake-case every mapping key in `value`, keeping tagged dates intact.
pub fn to_snake_case(value: &Value) -> Result<Value> {
    KeyCaser::snake().convert(value)
}

pub fn to_camel_case_with(value: &Value, options: &ConvertOptions) -> Result<Value> {
    KeyCaser::new(CamelCase, options.clone()).convert(value)
}

pub fn to_snake_case_with(value: &Value, options: &ConvertOptions) -> Result<Value> {
    KeyCaser::new(SnakeCase, options.clone()).convert(value)
}

enum Segment<'v> {
    Key(&'v str),
    Index(usize),
}

struct Walk<'c, 'v, C> {
    caser: &'c KeyCaser<C>,
    path: Vec<Segment<'v>>,
}

impl<'c, 'v, C: KeyCaseConverter> Walk<'c, 'v, C> {
    /// `depth` counts the containers entered so far, this one included.
    fn node(&mut self, value: &'v Value, depth: usize) -> Result<Value> {
        match (classify(value, &self.caser.options), value) {
            (NodeKind::Mapping, Value::Object(map)) => self.mapping(map, depth),
            (NodeKind::Sequence, Value::Array(items)) => self.sequence(items, depth),
            _ => Ok(value.clone()),
        }
    }

    fn mapping(&mut self, map: &'v Map<String, Value>, depth: usize) -> Result<Value> {
        self.enter(depth)?;

        let mut out = Map::new();
        for (key, child) in map {
            let renamed = self.caser.converter.convert(key);

            self.path.push(Segment::Key(key));
            let converted = self.node(child, depth + 1)?;
            self.path.pop();

            if out.contains_key(&renamed)
                && self.caser.options.on_collision == CollisionPolicy::Error
            {
                return Err(self.collision(map, key, renamed));
            }

            out.insert(renamed, converted);
        }

        Ok(Value::Object(out))
    }

    fn sequence(&mut self, items: &'v [Value], depth: usize) -> Result<Value> {
        self.enter(depth)?;

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push(Segment::Index(index));
            let kind = classify(item, &self.caser.options);
            let converted = match (kind, self.caser.options.sequences) {
                (NodeKind::Mapping, _) | (NodeKind::Sequence, SequenceElements::All) => {
                    self.node(item, depth + 1)?
                }
                _ => item.clone(),
            };
            self.path.pop();

            out.push(converted);
        }

        Ok(Value::Array(out))
    }

    fn enter(&self, depth: usize) -> Result<()> {
        let max_depth = self.caser.options.max_depth;
        if depth > max_depth {
            return Err(Error::convert_depth_limit_exceeded(max_depth, self.pointer()));
        }
        Ok(())
    }

    fn collision(&self, map: &Map<String, Value>, key: &str, renamed: String) -> Error {
        let mut source_keys: Vec<String> = map
            .keys()
            .take_while(|k| k.as_str() != key)
            .filter(|k| self.caser.converter.convert(k) == renamed)
            .cloned()
            .collect();
        source_keys.push(key.to_string());

        Error::convert_key_collision(renamed, source_keys, self.pointer())
    }

    /// RFC 6901 pointer to the node currently being visited.
    fn pointer(&self) -> String {
        self.path
            .iter()
            .map(|segment| match segment {
                Segment::Key(key) => format!("/{}", key.replace('~', "~0").replace('/', "~1")),
                Segment::Index(index) => format!("/{}", index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested(depth: usize) -> Value {
        let mut value = json!({ "leaf_value": 1 });
        for _ in 1..depth {
            value = json!({ "next_level": value });
        }
        value
    }

    #[test]
    fn null_is_kept_under_renamed_key() {
        let out = to_camel_case(&json!({ "user_id": null })).unwrap();
        assert_eq!(out, json!({ "userId": null }));
    }

    #[test]
    fn sequences_of_mappings_keep_length_and_order() {
        let input = json!({ "tag_list": [{ "item_id": 1 }, { "item_id": 2 }] });
        let out = to_camel_case(&input).unwrap();
        assert_eq!(out, json!({ "tagList": [{ "itemId": 1 }, { "itemId": 2 }] }));
    }

    #[test]
    fn nested_mappings_recurse() {
        let out = to_camel_case(&json!({ "outer_field": { "inner_field": 5 } })).unwrap();
        assert_eq!(out, json!({ "outerField": { "innerField": 5 } }));
    }

    #[test]
    fn snake_case_mirrors_camel_case() {
        let input = json!({ "outerField": { "innerList": [{ "itemId": 1 }, "rawText"] } });
        let out = to_snake_case(&input).unwrap();
        assert_eq!(
            out,
            json!({ "outer_field": { "inner_list": [{ "item_id": 1 }, "rawText"] } })
        );
    }

    #[test]
    fn snake_case_keeps_tagged_dates() {
        let input = json!({ "createdAt": { "$date": "2024-01-01T00:00:00Z" } });
        let out = to_snake_case(&input).unwrap();
        assert_eq!(out, json!({ "created_at": { "$date": "2024-01-01T00:00:00Z" } }));
    }

    #[test]
    fn camel_case_keeps_tagged_dates_unless_asked() {
        let input = json!({ "created_at": { "$date": "2024-01-01T00:00:00Z" } });

        let out = to_camel_case(&input).unwrap();
        assert_eq!(out, json!({ "createdAt": { "$date": "2024-01-01T00:00:00Z" } }));

        let options = ConvertOptions {
            keep_dates: false,
            ..ConvertOptions::camel()
        };
        let out = to_camel_case_with(&input, &options).unwrap();
        assert_eq!(out, json!({ "createdAt": { "date": "2024-01-01T00:00:00Z" } }));
    }

    #[test]
    fn non_mapping_input_passes_through() {
        assert_eq!(to_camel_case(&json!("some_text")).unwrap(), json!("some_text"));
        assert_eq!(to_snake_case(&json!(42)).unwrap(), json!(42));
        assert_eq!(to_camel_case(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn top_level_sequence_converts_mapping_elements() {
        let out = to_camel_case(&json!([{ "a_b": 1 }, 2, null])).unwrap();
        assert_eq!(out, json!([{ "aB": 1 }, 2, null]));
    }

    #[test]
    fn nested_sequences_pass_through_by_default() {
        let input = json!({ "grid_rows": [[{ "cell_id": 1 }]] });
        let out = to_camel_case(&input).unwrap();
        assert_eq!(out, json!({ "gridRows": [[{ "cell_id": 1 }]] }));
    }

    #[test]
    fn all_elements_policy_recurses_nested_sequences() {
        let input = json!({ "grid_rows": [[{ "cell_id": 1 }], 7] });
        let options = ConvertOptions {
            sequences: SequenceElements::All,
            ..ConvertOptions::camel()
        };
        let out = to_camel_case_with(&input, &options).unwrap();
        assert_eq!(out, json!({ "gridRows": [[{ "cellId": 1 }], 7] }));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = json!({ "user_id": 1, "nested_map": { "deep_key": [1, 2] } });
        let before = input.clone();
        let _ = to_camel_case(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn fifty_levels_convert() {
        let out = to_camel_case(&nested(50)).unwrap();
        let mut cursor = &out;
        for _ in 1..50 {
            cursor = &cursor["nextLevel"];
        }
        assert_eq!(cursor["leafValue"], 1);
    }

    #[test]
    fn depth_limit_is_inclusive() {
        let options = ConvertOptions {
            max_depth: 3,
            ..ConvertOptions::camel()
        };
        assert!(to_camel_case_with(&nested(3), &options).is_ok());

        let err = to_camel_case_with(&nested(4), &options).unwrap_err();
        assert_eq!(err.code.as_str(), "convert.depth_limit_exceeded");
        assert_eq!(err.details["path"], "/next_level/next_level/next_level");
        assert_eq!(err.details["maxDepth"], 3);
    }

    #[test]
    fn depth_counts_sequences() {
        let options = ConvertOptions {
            max_depth: 2,
            ..ConvertOptions::camel()
        };
        let err = to_camel_case_with(&json!({ "a": [{ "b": 1 }] }), &options).unwrap_err();
        assert_eq!(err.details["path"], "/a/0");
    }

    #[test]
    fn collisions_overwrite_by_default() {
        let out = to_camel_case(&json!({ "userId": 1, "user_id": 2 })).unwrap();
        assert_eq!(out.as_object().map(|m| m.len()), Some(1));
        assert!(out.get("userId").is_some());
    }

    #[test]
    fn collisions_can_fail() {
        let options = ConvertOptions {
            on_collision: CollisionPolicy::Error,
            ..ConvertOptions::camel()
        };
        let err = to_camel_case_with(&json!({ "userId": 1, "user_id": 2 }), &options).unwrap_err();
        assert_eq!(err.code.as_str(), "convert.key_collision");
        assert_eq!(err.details["key"], "userId");
        assert_eq!(err.details["sourceKeys"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn pointer_escapes_special_characters() {
        let options = ConvertOptions {
            max_depth: 1,
            ..ConvertOptions::snake()
        };
        let err = to_snake_case_with(&json!({ "a/b~c": { "x": 1 } }), &options).unwrap_err();
        assert_eq!(err.details["path"], "/a~1b~0c");
    }

    #[test]
    fn custom_converter_is_used_for_every_key() {
        let caser = KeyCaser::new(|key: &str| key.to_uppercase(), ConvertOptions::camel());
        let out = caser.convert(&json!({ "a": { "b": [{ "c": 1 }] } })).unwrap();
        assert_eq!(out, json!({ "A": { "B": [{ "C": 1 }] } }));
    }

    #[test]
    fn invalid_options_fail_before_walking() {
        let caser = KeyCaser::snake().with_options(ConvertOptions {
            max_depth: 0,
            ..ConvertOptions::snake()
        });
        let err = caser.convert(&json!({})).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }
}
