//! Text-level parsing.
//!
//! - [`split`]: nesting-aware splitting on multi-character separators
//! - [`declaration`]: raw declaration strings → options or range
//! - [`coords`]: coordinate notation and fixed-precision formatting

pub mod coords;
pub mod declaration;
pub mod split;

pub use declaration::{parse_declaration, OPTIONS_SEPARATOR, RANGE_SEPARATOR};
pub use split::{nested_split, nested_split_with, NESTING_PAIRS};
