//! Declaration parsing: options lists and range pairs.

use tracing::debug;

use crate::error::ParseError;
use crate::model::ParsedDeclaration;
use crate::parse::split::nested_split;

/// Separator for `low..high` range declarations.
pub const RANGE_SEPARATOR: &str = "..";

/// Separator for `a|b|c` options declarations.
pub const OPTIONS_SEPARATOR: &str = "|";

/// Parses a raw declaration string into options or a range.
///
/// Range takes precedence over options: a top-level `..` always wins, so a
/// literal `..` can never appear inside an options list. That matches the
/// behavior declarations were written against and is kept for
/// compatibility. A declaration with more than one top-level `..` is
/// accepted, with only the first pair used.
///
/// # Errors
///
/// [`ParseError::UnparseableDeclaration`] when neither separator appears at
/// the top nesting level.
pub fn parse_declaration(raw: &str) -> Result<ParsedDeclaration, ParseError> {
    let range_parts = nested_split(raw, RANGE_SEPARATOR);
    if range_parts.len() >= 2 {
        if range_parts.len() > 2 {
            debug!(declaration = raw, "extra `..` parts ignored, using the first pair");
        }
        return Ok(ParsedDeclaration::Range {
            low: range_parts[0].to_string(),
            high: range_parts[1].to_string(),
        });
    }

    let options = nested_split(raw, OPTIONS_SEPARATOR);
    if options.len() >= 2 {
        return Ok(ParsedDeclaration::Options(
            options.into_iter().map(str::to_string).collect(),
        ));
    }

    Err(ParseError::UnparseableDeclaration {
        raw: raw.to_string(),
    })
}
