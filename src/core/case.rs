//! Single-key case conversion.
//!
//! The traversal in `convert` never inspects key text itself; it hands every
//! key to a [`KeyCaseConverter`]. The built-in converters delegate to `heck`.

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Converts one key name to a target case convention.
///
/// Implementations must be pure and idempotent on keys that are already in
/// the target convention.
pub trait KeyCaseConverter {
    fn convert(&self, key: &str) -> String;

    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;
}

/// `user_id` → `userId`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CamelCase;

/// `userId` → `user_id`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeCase;

impl KeyCaseConverter for CamelCase {
    fn convert(&self, key: &str) -> String {
        key.to_lower_camel_case()
    }

    fn name(&self) -> &'static str {
        "camel"
    }
}

impl KeyCaseConverter for SnakeCase {
    fn convert(&self, key: &str) -> String {
        key.to_snake_case()
    }

    fn name(&self) -> &'static str {
        "snake"
    }
}

impl<F> KeyCaseConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, key: &str) -> String {
        self(key)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}
