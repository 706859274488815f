//! Error types for declaration parsing and range materialization.
//!
//! Every error here is attribute-scoped and non-fatal: the owning attribute
//! is dropped or skipped, the rest of the pass continues.

use std::fmt;

use thiserror::Error;

/// Error while parsing a raw declaration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither a `..` range separator nor a `|` options separator appears at
    /// the top nesting level.
    #[error("unable to parse declaration, expecting `..` or `|` in: '{raw}'")]
    UnparseableDeclaration { raw: String },
}

/// Error while converting textual range bounds against a live sample value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizeError {
    /// Array bounds decomposed into a different number of elements.
    #[error("array bounds have {low} and {high} elements, counts must match")]
    ArrayLengthMismatch { low: usize, high: usize },

    /// A bound could not be converted to the sample's native form.
    #[error("cannot read {kind} bound from '{text}'")]
    InvalidBound { kind: BoundKind, text: String },
}

/// The conversion a range bound failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Number,
    Color,
    Coordinates,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundKind::Number => "number",
            BoundKind::Color => "color",
            BoundKind::Coordinates => "coordinates",
        };
        write!(f, "{name}")
    }
}
