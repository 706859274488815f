//! Randomization orchestration over host targets.
//!
//! A [`Randomizer`] owns a declaration schema, a PRNG, and the per-attribute
//! resolution cache. Hosts hand it targets through the narrow [`Target`]
//! trait; everything else (schema storage, selector semantics, child-set
//! observation) stays on the host side.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::materialize::{materialize, Materialized};
use crate::model::{AttrValue, ParsedDeclaration, TypedRange};
use crate::parse::declaration::parse_declaration;
use crate::rng::SeededRng;
use crate::util::color::ColorSpace;

/// Reserved configuration attribute: the PRNG seed. Negative selects the
/// non-reproducible entropy mode.
pub const SEED_ATTR: &str = "_seed";

/// Reserved configuration attribute: the child selector. Empty means
/// "randomize the owning target itself".
pub const TARGET_ATTR: &str = "_target";

const DEFAULT_SEED: i64 = -1;

/// An addressable host object the randomizer reads samples from and writes
/// randomized values to.
///
/// Attribute paths are either plain names or dotted `component.property`
/// pairs; the component segment arrives normalized to kebab-case, the
/// property segment is passed through unchanged.
pub trait Target {
    /// Stable identity, used to avoid re-rolling already processed children.
    fn id(&self) -> u64;

    /// Whether this target matches a child selector. Selector semantics are
    /// the host's (`*`, CSS-style, tag names — whatever it supports).
    fn matches(&self, selector: &str) -> bool;

    /// Reads the attribute at `path`, or `None` when this target does not
    /// expose it.
    fn get(&self, path: &str) -> Option<AttrValue>;

    /// Writes a formatted value. Returns `false` when the target does not
    /// expose the attribute; the randomizer treats that as a no-op.
    fn set(&mut self, path: &str, value: &str) -> bool;
}

/// Resolution state of one range-declared attribute.
#[derive(Debug, Clone, PartialEq)]
enum Resolution {
    /// Not yet materialized; retried on every pass until a usable sample
    /// shows up. `warned` dedups the unsupported-shape warning.
    Pending { warned: bool },
    /// Materialized; drawn from the cached range on every pass.
    Resolved(TypedRange),
    /// Materialization failed; never retried for this schema.
    Unresolvable,
}

#[derive(Debug, Clone)]
enum AttrKind {
    Options(Vec<String>),
    Range {
        low: String,
        high: String,
        resolution: Resolution,
    },
}

#[derive(Debug, Clone)]
struct AttrEntry {
    name: String,
    /// `name` with the component segment normalized to kebab-case.
    path: String,
    kind: AttrKind,
}

/// Per-instance randomizer.
///
/// Holds the ordered attribute schema (insertion order of declarations,
/// which fixes the draw order), the PRNG state, and the processed-children
/// set. Single-threaded by construction: one logical caller at a time.
#[derive(Debug)]
pub struct Randomizer {
    rng: SeededRng,
    seed: i64,
    selector: String,
    space: ColorSpace,
    attrs: Vec<AttrEntry>,
    processed: FxHashSet<u64>,
}

impl Randomizer {
    /// Builds a randomizer from an ordered `(attribute, declaration)`
    /// mapping.
    ///
    /// The reserved [`SEED_ATTR`] and [`TARGET_ATTR`] entries configure the
    /// instance instead of declaring attributes. Unparseable declarations
    /// are logged and dropped; the rest of the schema stays usable.
    pub fn from_declarations<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut randomizer = Self {
            rng: SeededRng::new(DEFAULT_SEED),
            seed: DEFAULT_SEED,
            selector: String::new(),
            space: ColorSpace::default(),
            attrs: Vec::new(),
            processed: FxHashSet::default(),
        };
        randomizer.install(pairs);
        randomizer
    }

    /// Replaces the schema, re-parsing every declaration.
    ///
    /// Cached resolutions belong to the old declarations and are discarded;
    /// the PRNG is re-seeded only when the declared seed changed.
    pub fn update_declarations<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.install(pairs);
    }

    fn install<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.attrs.clear();
        self.processed.clear();
        let mut seed = DEFAULT_SEED;

        for (name, raw) in pairs {
            let (name, raw) = (name.as_ref(), raw.as_ref());
            match name {
                SEED_ATTR => match raw.trim().parse::<i64>() {
                    Ok(value) => seed = value,
                    Err(_) => {
                        warn!(value = raw, "cannot read `{SEED_ATTR}`, keeping {DEFAULT_SEED}");
                    }
                },
                TARGET_ATTR => self.selector = raw.to_string(),
                _ => match parse_declaration(raw) {
                    Ok(ParsedDeclaration::Options(options)) => self.attrs.push(AttrEntry {
                        name: name.to_string(),
                        path: component_path(name),
                        kind: AttrKind::Options(options),
                    }),
                    Ok(ParsedDeclaration::Range { low, high }) => self.attrs.push(AttrEntry {
                        name: name.to_string(),
                        path: component_path(name),
                        kind: AttrKind::Range {
                            low,
                            high,
                            resolution: Resolution::Pending { warned: false },
                        },
                    }),
                    Err(err) => {
                        warn!(attribute = name, error = %err, "declaration dropped");
                    }
                },
            }
        }

        if seed != self.seed {
            self.seed = seed;
            self.rng.reseed(seed);
        }
    }

    /// The configured seed.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Reconfigures the seed, restarting the deterministic sequence.
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = seed;
        self.rng.reseed(seed);
    }

    /// The configured child selector (empty = the owning target itself).
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Channel space for color draws (HSL by default).
    pub fn set_color_space(&mut self, space: ColorSpace) {
        self.space = space;
    }

    /// Clears the processed-children set and every cached resolution.
    ///
    /// Cached typed ranges were materialized from one target set's samples
    /// and cannot be assumed valid for another; hosts call this whenever
    /// the target set changes, before the next pass.
    pub fn reset(&mut self) {
        self.processed.clear();
        for entry in &mut self.attrs {
            if let AttrKind::Range { resolution, .. } = &mut entry.kind {
                *resolution = Resolution::Pending { warned: false };
            }
        }
    }

    /// Randomizes every declared attribute on one target, in declaration
    /// order.
    ///
    /// Per attribute and pass: at most one sample read (first resolution
    /// only) and at most one write. A failing attribute is logged and
    /// skipped; the pass always continues.
    pub fn randomize(&mut self, target: &mut dyn Target) {
        for entry in &mut self.attrs {
            match &mut entry.kind {
                AttrKind::Options(options) => {
                    let index = (self.rng.next_f64() * options.len() as f64) as usize;
                    write(target, &entry.path, &options[index]);
                }
                AttrKind::Range {
                    low,
                    high,
                    resolution,
                } => {
                    if matches!(resolution, Resolution::Pending { .. }) {
                        let sample = target.get(&entry.path);
                        match materialize(low, high, sample.as_ref(), self.space) {
                            Ok(Materialized::Resolved(range)) => {
                                *resolution = Resolution::Resolved(range);
                            }
                            Ok(Materialized::Retry) => {
                                if sample.is_some() {
                                    if let Resolution::Pending { warned } = resolution {
                                        if !*warned {
                                            warn!(
                                                attribute = entry.name.as_str(),
                                                "no randomizer for this sample's shape, \
                                                 waiting for another target"
                                            );
                                            *warned = true;
                                        }
                                    }
                                }
                            }
                            Err(err) => {
                                warn!(
                                    attribute = entry.name.as_str(),
                                    error = %err,
                                    "range cannot be materialized, attribute disabled"
                                );
                                *resolution = Resolution::Unresolvable;
                            }
                        }
                    }

                    if let Resolution::Resolved(range) = resolution {
                        let value = range.draw(&mut self.rng);
                        write(target, &entry.path, &value);
                    }
                }
            }
        }
    }

    /// Randomizes the children matching the configured selector, strictly in
    /// the given order against the same PRNG state.
    ///
    /// Children already processed by this instance are skipped, so the host
    /// can re-invoke this with the full child list after a mutation and only
    /// newly-added children are rolled.
    pub fn randomize_children<'a, I>(&mut self, children: I)
    where
        I: IntoIterator<Item = &'a mut dyn Target>,
    {
        for child in children {
            if self.processed.contains(&child.id()) || !child.matches(&self.selector) {
                continue;
            }
            self.randomize(child);
            self.processed.insert(child.id());
        }
    }
}

fn write(target: &mut dyn Target, path: &str, value: &str) {
    if !target.set(path, value) {
        debug!(path, "target does not expose the attribute, write skipped");
    }
}

/// Normalizes a dotted attribute path: the component segment (before the
/// first dot) converts from camelCase to kebab-case, the property segment is
/// case-sensitive and passes through unchanged.
fn component_path(name: &str) -> String {
    match name.split_once('.') {
        Some((component, property)) => format!("{}.{property}", to_kebab_case(component)),
        None => name.to_string(),
    }
}

fn to_kebab_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut prev_lower = false;
    for c in text.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}
