//! Sample values read from targets, and their shape classification.
//!
//! The randomizer never sees the host's own attribute types; hosts lower
//! whatever they store into [`AttrValue`] when asked for a sample. The
//! sample's [`Shape`] selects which randomizer family a range declaration
//! materializes into.

/// A live attribute value read from a target.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text. A leading `#` marks a color; any other text has no randomizer.
    Str(String),
    /// Scalar number.
    Number(f64),
    /// Two-component vector.
    Vec2 { x: f64, y: f64 },
    /// Three-component vector.
    Vec3 { x: f64, y: f64, z: f64 },
    /// Four-component vector.
    Vec4 { x: f64, y: f64, z: f64, w: f64 },
    /// Ordered sequence of values.
    List(Vec<AttrValue>),
    /// Boolean. No randomizer.
    Bool(bool),
}

impl AttrValue {
    /// Convenience constructor for text values.
    pub fn str(text: impl Into<String>) -> Self {
        AttrValue::Str(text.into())
    }

    /// Classifies this value into the randomizer family it selects.
    ///
    /// Total and side-effect-free: every value maps to exactly one shape,
    /// with `Unsupported` covering booleans and non-color text.
    pub fn shape(&self) -> Shape {
        match self {
            AttrValue::Str(s) if s.starts_with('#') => Shape::Color,
            AttrValue::Str(_) | AttrValue::Bool(_) => Shape::Unsupported,
            AttrValue::Number(_) => Shape::Number,
            AttrValue::Vec2 { .. } => Shape::Vector2,
            AttrValue::Vec3 { .. } => Shape::Vector3,
            AttrValue::Vec4 { .. } => Shape::Vector4,
            AttrValue::List(_) => Shape::Array,
        }
    }
}

/// The randomizer family a sample value selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Number,
    Color,
    Vector2,
    Vector3,
    Vector4,
    Array,
    /// No randomizer applies; the attribute is skipped until a
    /// differently-shaped sample becomes available.
    Unsupported,
}

impl Shape {
    /// Component count for vector shapes.
    pub fn vector_arity(self) -> Option<usize> {
        match self {
            Shape::Vector2 => Some(2),
            Shape::Vector3 => Some(3),
            Shape::Vector4 => Some(4),
            _ => None,
        }
    }
}
