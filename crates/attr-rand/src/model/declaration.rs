//! Declaration forms.
//!
//! A declaration is the raw per-attribute string a caller attaches to a
//! target, e.g. `"0.5..2"` or `"red|green|blue"`. Parsing produces exactly
//! one of the two forms below; strings with neither separator at the top
//! nesting level are rejected at parse time.

/// A parsed per-attribute declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDeclaration {
    /// Pick one of the listed literals on every draw.
    Options(Vec<String>),
    /// Randomize between two textual bounds, typed lazily from a live
    /// sample value.
    Range { low: String, high: String },
}

impl ParsedDeclaration {
    /// Whether this declaration is an options list.
    pub fn is_options(&self) -> bool {
        matches!(self, ParsedDeclaration::Options(_))
    }

    /// Whether this declaration is a range pair.
    pub fn is_range(&self) -> bool {
        matches!(self, ParsedDeclaration::Range { .. })
    }
}
