// Public modules
pub mod case;
pub mod convert;
pub mod defaults;
pub mod error;
pub mod format;
pub mod kind;
pub mod options;
pub mod wire;

// Re-export common types for convenience
pub use case::{CamelCase, KeyCaseConverter, SnakeCase};
pub use convert::{to_camel_case, to_camel_case_with, to_snake_case, to_snake_case_with, KeyCaser};
pub use error::{Error, ErrorCode, Result};
pub use kind::{classify, is_tagged_date, NodeKind};
pub use options::{CollisionPolicy, ConvertOptions, Direction, SequenceElements};
pub use wire::{decode_camel, encode_snake};
