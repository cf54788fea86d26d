//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File and stdin reading with consistent error handling

pub mod io;
