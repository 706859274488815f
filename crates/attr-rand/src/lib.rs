//! Declarative per-attribute randomization.
//!
//! This crate turns short declaration strings — `"min..max"` ranges and
//! `"a|b|c"` option lists — into randomized attribute values applied to any
//! addressable object. Range declarations are untyped until first use:
//! one live sample value read from the target picks the randomizer family
//! (number, color, vector, array), the textual bounds convert to that
//! family's native form, and the result is cached for every later draw.
//!
//! # Overview
//!
//! - **Nesting-aware splitting**: separators inside `'' "" {} [] ()` never
//!   split, so bounds can carry nested lists and quoted text.
//! - **Reproducible draws**: non-negative seeds drive a fixed LCG whose
//!   sequence is identical across runs; negative seeds use platform entropy.
//! - **Attribute-level isolation**: a declaration that fails to parse or
//!   materialize is logged and skipped; the rest of the pass continues, and
//!   nothing here is ever fatal to the host.
//!
//! # Quick Start
//!
//! ```rust
//! use attr_rand::{AttrValue, Randomizer, Target};
//!
//! struct Lamp {
//!     brightness: f64,
//!     color: String,
//! }
//!
//! impl Target for Lamp {
//!     fn id(&self) -> u64 {
//!         1
//!     }
//!     fn matches(&self, _selector: &str) -> bool {
//!         true
//!     }
//!     fn get(&self, path: &str) -> Option<AttrValue> {
//!         match path {
//!             "brightness" => Some(AttrValue::Number(self.brightness)),
//!             "color" => Some(AttrValue::str(&self.color)),
//!             _ => None,
//!         }
//!     }
//!     fn set(&mut self, path: &str, value: &str) -> bool {
//!         match path {
//!             "brightness" => self.brightness = value.parse().unwrap_or(self.brightness),
//!             "color" => self.color = value.to_string(),
//!             _ => return false,
//!         }
//!         true
//!     }
//! }
//!
//! let mut randomizer = Randomizer::from_declarations([
//!     ("_seed", "1234567"),
//!     ("brightness", "0.2..1"),
//!     ("color", "#200..#fff"),
//! ]);
//!
//! let mut lamp = Lamp {
//!     brightness: 0.5,
//!     color: "#ffffff".to_string(),
//! };
//! randomizer.randomize(&mut lamp);
//!
//! assert!((0.2..1.0).contains(&lamp.brightness));
//! assert!(lamp.color.starts_with('#'));
//! ```
//!
//! # Modules
//!
//! - [`engine`]: the [`Randomizer`] orchestrator and the host-facing
//!   [`Target`] trait
//! - [`model`]: declarations, sample values, typed ranges
//! - [`parse`]: nesting-aware splitting, declaration parsing, coordinate
//!   notation
//! - [`materialize`]: shape dispatch from sample values to typed ranges
//! - [`rng`]: the seeded generator
//! - [`util::color`]: hex / named-color parsing and RGB↔HSL conversion
//! - [`error`]: error types

pub mod engine;
pub mod error;
pub mod materialize;
pub mod model;
pub mod parse;
pub mod rng;
pub mod util;

// Re-export commonly used types at crate root
pub use engine::{Randomizer, Target, SEED_ATTR, TARGET_ATTR};
pub use error::{BoundKind, ParseError, RandomizeError};
pub use materialize::{materialize, Materialized};
pub use model::{AttrValue, ParsedDeclaration, Shape, TypedRange};
pub use parse::{nested_split, parse_declaration};
pub use rng::SeededRng;
pub use util::color::ColorSpace;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
