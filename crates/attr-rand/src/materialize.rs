//! Type inference and range materialization.
//!
//! A range declaration carries no type of its own. The first time it is
//! applied to a live target, the current attribute value is read as a
//! sample, the sample's shape picks the randomizer family, and the textual
//! bounds are converted to that family's native form. The resulting
//! [`TypedRange`] is cached by the caller and reused for every later draw.

use crate::error::{BoundKind, RandomizeError};
use crate::model::{AttrValue, Shape, TypedRange};
use crate::parse::coords;
use crate::parse::split::nested_split;
use crate::util::color::{self, ColorSpace};

/// Outcome of a materialization attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    /// Bounds converted; the typed range selects the randomizer.
    Resolved(TypedRange),
    /// No usable sample on this target. The attribute may still resolve
    /// against a different target whose sample has a supported shape.
    Retry,
}

/// Converts textual range bounds into a typed range using one live sample.
///
/// Absent samples and unsupported shapes (booleans, non-color text, unknown
/// structure) yield [`Materialized::Retry`]; bound conversion failures and
/// array length mismatches are errors, and callers stop retrying the
/// attribute once they see one.
///
/// Pure: the same bounds and the same sample shape always produce the same
/// result.
pub fn materialize(
    low: &str,
    high: &str,
    sample: Option<&AttrValue>,
    space: ColorSpace,
) -> Result<Materialized, RandomizeError> {
    let Some(sample) = sample else {
        return Ok(Materialized::Retry);
    };

    let range = match sample.shape() {
        Shape::Number => number_range(low, high)?,
        Shape::Color => color_range(low, high, space)?,
        Shape::Vector2 => vector_range(low, high, 2)?,
        Shape::Vector3 => vector_range(low, high, 3)?,
        Shape::Vector4 => vector_range(low, high, 4)?,
        Shape::Array => array_range(low, high, space)?,
        Shape::Unsupported => return Ok(Materialized::Retry),
    };
    Ok(Materialized::Resolved(range))
}

fn invalid(kind: BoundKind, text: &str) -> RandomizeError {
    RandomizeError::InvalidBound {
        kind,
        text: text.to_string(),
    }
}

fn number_range(low: &str, high: &str) -> Result<TypedRange, RandomizeError> {
    let lo = coords::parse_number(low).ok_or_else(|| invalid(BoundKind::Number, low))?;
    let hi = coords::parse_number(high).ok_or_else(|| invalid(BoundKind::Number, high))?;
    Ok(TypedRange::Number { low: lo, high: hi })
}

fn color_range(low: &str, high: &str, space: ColorSpace) -> Result<TypedRange, RandomizeError> {
    let lo = color::parse(low).ok_or_else(|| invalid(BoundKind::Color, low))?;
    let hi = color::parse(high).ok_or_else(|| invalid(BoundKind::Color, high))?;
    Ok(TypedRange::Color {
        space,
        low: color::to_channels(lo, space),
        high: color::to_channels(hi, space),
    })
}

fn vector_range(low: &str, high: &str, arity: usize) -> Result<TypedRange, RandomizeError> {
    Ok(TypedRange::Vector {
        low: parse_components(low, arity)?,
        high: parse_components(high, arity)?,
    })
}

/// Parses coordinate notation with at least `arity` components; extra
/// components are ignored.
fn parse_components(text: &str, arity: usize) -> Result<Vec<f64>, RandomizeError> {
    let mut components =
        coords::parse_coords(text).ok_or_else(|| invalid(BoundKind::Coordinates, text))?;
    if components.len() < arity {
        return Err(invalid(BoundKind::Coordinates, text));
    }
    components.truncate(arity);
    Ok(components)
}

fn array_range(low: &str, high: &str, space: ColorSpace) -> Result<TypedRange, RandomizeError> {
    let lows = nested_split(low, ",");
    let highs = nested_split(high, ",");
    if lows.len() != highs.len() {
        return Err(RandomizeError::ArrayLengthMismatch {
            low: lows.len(),
            high: highs.len(),
        });
    }

    let mut items = Vec::with_capacity(lows.len());
    for (lo, hi) in lows.into_iter().zip(highs) {
        items.push(element_range(lo.trim(), hi.trim(), space)?);
    }
    Ok(TypedRange::Array(items))
}

/// Guesses an array element's type from its low bound: multi-token numeric
/// text is a vector, a single numeric token is a number, anything else is
/// tried as a color.
///
/// The host design this comes from could not ask its color library whether
/// parsing failed; it probed twice with different fallback defaults to tell
/// a real `white` from the default-on-failure value, and still confused the
/// two when the user's color equaled the probe default. [`color::parse`]
/// returns `Option`, so an unrecognized name simply falls through to a
/// constant [`TypedRange::Literal`] element here.
fn element_range(low: &str, high: &str, space: ColorSpace) -> Result<TypedRange, RandomizeError> {
    if let Some(lo) = coords::parse_coords(low).filter(|c| !c.is_empty()) {
        if lo.len() == 1 {
            let hi = coords::parse_number(high).ok_or_else(|| invalid(BoundKind::Number, high))?;
            return Ok(TypedRange::Number { low: lo[0], high: hi });
        }
        let hi = coords::parse_coords(high)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| invalid(BoundKind::Coordinates, high))?;
        if hi.len() != lo.len() {
            return Err(RandomizeError::ArrayLengthMismatch {
                low: lo.len(),
                high: hi.len(),
            });
        }
        return Ok(TypedRange::Vector { low: lo, high: hi });
    }

    if let Some(lo) = color::parse(low) {
        let hi = color::parse(high).ok_or_else(|| invalid(BoundKind::Color, high))?;
        return Ok(TypedRange::Color {
            space,
            low: color::to_channels(lo, space),
            high: color::to_channels(hi, space),
        });
    }

    Ok(TypedRange::Literal(low.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: ColorSpace = ColorSpace::Hsl;

    fn resolved(result: Result<Materialized, RandomizeError>) -> TypedRange {
        match result.unwrap() {
            Materialized::Resolved(range) => range,
            Materialized::Retry => panic!("expected a resolved range"),
        }
    }

    #[test]
    fn test_absent_sample_retries() {
        assert_eq!(materialize("0", "1", None, SPACE), Ok(Materialized::Retry));
    }

    #[test]
    fn test_unsupported_samples_retry() {
        for sample in [
            AttrValue::Bool(true),
            AttrValue::str("visible"),
            AttrValue::str(""),
        ] {
            assert_eq!(
                materialize("0", "1", Some(&sample), SPACE),
                Ok(Materialized::Retry)
            );
        }
    }

    #[test]
    fn test_number_sample() {
        let range = resolved(materialize("0.5", "2", Some(&AttrValue::Number(1.0)), SPACE));
        assert_eq!(range, TypedRange::Number { low: 0.5, high: 2.0 });
    }

    #[test]
    fn test_number_bounds_tolerate_whitespace() {
        // A declaration written as `0 .. 1` leaves padding on both bounds.
        let range = resolved(materialize("0 ", " 1", Some(&AttrValue::Number(0.0)), SPACE));
        assert_eq!(range, TypedRange::Number { low: 0.0, high: 1.0 });
    }

    #[test]
    fn test_bad_number_bound_is_an_error() {
        let result = materialize("zero", "1", Some(&AttrValue::Number(0.0)), SPACE);
        assert_eq!(
            result,
            Err(RandomizeError::InvalidBound {
                kind: BoundKind::Number,
                text: "zero".to_string(),
            })
        );
    }

    #[test]
    fn test_color_sample() {
        let sample = AttrValue::str("#808080");
        let range = resolved(materialize("#000", "#fff", Some(&sample), SPACE));
        match range {
            TypedRange::Color { space, low, high } => {
                assert_eq!(space, SPACE);
                assert_eq!(low, [0.0, 0.0, 0.0]);
                // White in HSL: hue 0, saturation 0, lightness 1.
                assert_eq!(high, [0.0, 0.0, 1.0]);
            }
            other => panic!("expected a color range, got {other:?}"),
        }
    }

    #[test]
    fn test_color_bounds_accept_names() {
        let sample = AttrValue::str("#808080");
        let range = resolved(materialize("black", "WHITE", Some(&sample), SPACE));
        assert!(matches!(range, TypedRange::Color { .. }));
    }

    #[test]
    fn test_bad_color_bound_is_an_error() {
        let sample = AttrValue::str("#808080");
        let result = materialize("#000", "bright", Some(&sample), SPACE);
        assert_eq!(
            result,
            Err(RandomizeError::InvalidBound {
                kind: BoundKind::Color,
                text: "bright".to_string(),
            })
        );
    }

    #[test]
    fn test_vector_sample() {
        let sample = AttrValue::Vec3 { x: 0.0, y: 0.0, z: 0.0 };
        let range = resolved(materialize("0 0 0", "1 2 3", Some(&sample), SPACE));
        assert_eq!(
            range,
            TypedRange::Vector {
                low: vec![0.0, 0.0, 0.0],
                high: vec![1.0, 2.0, 3.0],
            }
        );
    }

    #[test]
    fn test_vector_bound_extra_components_ignored() {
        let sample = AttrValue::Vec2 { x: 0.0, y: 0.0 };
        let range = resolved(materialize("0 0 9", "1 1 9", Some(&sample), SPACE));
        assert_eq!(
            range,
            TypedRange::Vector {
                low: vec![0.0, 0.0],
                high: vec![1.0, 1.0],
            }
        );
    }

    #[test]
    fn test_vector_bound_too_short_is_an_error() {
        let sample = AttrValue::Vec3 { x: 0.0, y: 0.0, z: 0.0 };
        let result = materialize("0 0", "1 1 1", Some(&sample), SPACE);
        assert_eq!(
            result,
            Err(RandomizeError::InvalidBound {
                kind: BoundKind::Coordinates,
                text: "0 0".to_string(),
            })
        );
    }

    #[test]
    fn test_array_length_mismatch() {
        let sample = AttrValue::List(vec![AttrValue::Number(0.0)]);
        let result = materialize("1,2", "1,2,3", Some(&sample), SPACE);
        assert_eq!(
            result,
            Err(RandomizeError::ArrayLengthMismatch { low: 2, high: 3 })
        );
    }

    #[test]
    fn test_array_mixed_element_types() {
        let sample = AttrValue::List(vec![]);
        let range = resolved(materialize(
            "1, #f00, 0 0",
            "2, #00f, 1 1",
            Some(&sample),
            SPACE,
        ));
        match range {
            TypedRange::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], TypedRange::Number { low: 1.0, high: 2.0 });
                assert!(matches!(items[1], TypedRange::Color { .. }));
                assert!(matches!(&items[2], TypedRange::Vector { low, .. } if low.len() == 2));
            }
            other => panic!("expected an array range, got {other:?}"),
        }
    }

    #[test]
    fn test_array_literal_fallback() {
        let sample = AttrValue::List(vec![]);
        let range = resolved(materialize("flat,1", "shaded,2", Some(&sample), SPACE));
        match range {
            TypedRange::Array(items) => {
                assert_eq!(items[0], TypedRange::Literal("flat".to_string()));
                assert_eq!(items[1], TypedRange::Number { low: 1.0, high: 2.0 });
            }
            other => panic!("expected an array range, got {other:?}"),
        }
    }

    #[test]
    fn test_array_vector_component_mismatch() {
        let sample = AttrValue::List(vec![]);
        let result = materialize("0 0", "1 1 1", Some(&sample), SPACE);
        assert_eq!(
            result,
            Err(RandomizeError::ArrayLengthMismatch { low: 2, high: 3 })
        );
    }

    #[test]
    fn test_nested_bounds_split_at_the_top_level_only() {
        let sample = AttrValue::List(vec![]);
        let range = resolved(materialize("[a,b],1", "[c,d],2", Some(&sample), SPACE));
        match range {
            TypedRange::Array(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], TypedRange::Literal("[a,b]".to_string()));
            }
            other => panic!("expected an array range, got {other:?}"),
        }
    }

    #[test]
    fn test_materialization_is_idempotent() {
        let sample = AttrValue::Number(1.0);
        let a = materialize("0", "1", Some(&sample), SPACE);
        let b = materialize("0", "1", Some(&sample), SPACE);
        assert_eq!(a, b);
    }
}
