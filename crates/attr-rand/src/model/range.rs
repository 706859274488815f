//! Typed ranges: materialized bounds plus the randomizer they select.

use crate::parse::coords::format_fixed;
use crate::rng::SeededRng;
use crate::util::color::{self, ColorSpace};

/// Range bounds converted to their native form.
///
/// Both bounds always hold the same variant; array bounds hold one range per
/// index with equal counts on both sides. Construction happens in the
/// materializer, which enforces those invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedRange {
    /// Scalar drawn in `[low, high)`, fixed 4-digit output.
    Number { low: f64, high: f64 },
    /// Color channels drawn independently in the given space, `#rrggbb`
    /// output.
    Color {
        space: ColorSpace,
        low: [f64; 3],
        high: [f64; 3],
    },
    /// Components drawn independently, whitespace-joined fixed output.
    /// Bounds have equal length (2 to 4).
    Vector { low: Vec<f64>, high: Vec<f64> },
    /// One range per index, comma-joined output.
    Array(Vec<TypedRange>),
    /// Constant array element; yields the text unchanged and draws nothing,
    /// so a constant never perturbs its neighbors' draw sequence.
    Literal(String),
}

impl TypedRange {
    /// Draws one formatted value, advancing the generator.
    pub fn draw(&self, rng: &mut SeededRng) -> String {
        match self {
            TypedRange::Number { low, high } => format_fixed(rng.range(*low, *high)),
            TypedRange::Color { space, low, high } => {
                let channels = [
                    rng.range(low[0], high[0]),
                    rng.range(low[1], high[1]),
                    rng.range(low[2], high[2]),
                ];
                color::to_hex(color::from_channels(channels, *space))
            }
            TypedRange::Vector { low, high } => low
                .iter()
                .zip(high)
                .map(|(lo, hi)| format_fixed(rng.range(*lo, *hi)))
                .collect::<Vec<_>>()
                .join(" "),
            TypedRange::Array(items) => items
                .iter()
                .map(|item| item.draw(rng))
                .collect::<Vec<_>>()
                .join(","),
            TypedRange::Literal(text) => text.clone(),
        }
    }
}
