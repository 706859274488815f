//! Demo scene for attr-rand.
//!
//! Builds a handful of in-memory entities, attaches declaration schemas,
//! and prints the randomized attribute values for a single-target pass and
//! a children-matching pass. Run with `RUST_LOG=debug` to see the engine's
//! skip/drop decisions.

use rustc_hash::FxHashMap;

use attr_rand::{AttrValue, Randomizer, Target};

/// A minimal addressable entity: named attributes plus a tag the child
/// selector matches against.
struct Entity {
    id: u64,
    name: &'static str,
    tag: &'static str,
    attrs: FxHashMap<String, AttrValue>,
    applied: Vec<(String, String)>,
}

impl Entity {
    fn new(id: u64, name: &'static str, tag: &'static str) -> Self {
        Self {
            id,
            name,
            tag,
            attrs: FxHashMap::default(),
            applied: Vec::new(),
        }
    }

    fn with(mut self, attr: &str, value: AttrValue) -> Self {
        self.attrs.insert(attr.to_string(), value);
        self
    }

    fn report(&self) {
        if self.applied.is_empty() {
            println!("  {} — untouched", self.name);
            return;
        }
        for (attr, value) in &self.applied {
            println!("  {} {attr} = {value}", self.name);
        }
    }
}

impl Target for Entity {
    fn id(&self) -> u64 {
        self.id
    }

    fn matches(&self, selector: &str) -> bool {
        selector == "*" || selector == self.tag
    }

    fn get(&self, path: &str) -> Option<AttrValue> {
        self.attrs.get(path).cloned()
    }

    fn set(&mut self, path: &str, value: &str) -> bool {
        self.applied.push((path.to_string(), value.to_string()));
        true
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Single-target mode: empty `_target` randomizes the owning entity.
    let mut randomizer = Randomizer::from_declarations([
        ("_seed", "1234567"),
        ("radius", "0.5..2"),
        ("color", "#400..#fff"),
        ("position", "-5 0 -5..5 2 5"),
        ("material.shader", "flat|standard|toon"),
    ]);

    let mut orb = Entity::new(1, "orb", "")
        .with("radius", AttrValue::Number(1.0))
        .with("color", AttrValue::str("#ffffff"))
        .with(
            "position",
            AttrValue::Vec3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        );

    println!("single target, seed 1234567:");
    randomizer.randomize(&mut orb);
    orb.report();

    // Children mode: only entities matching the selector are rolled, each
    // at most once, all against the same draw sequence.
    let mut forest = Randomizer::from_declarations([
        ("_seed", "0"),
        ("_target", "tree"),
        ("height", "1..10"),
        ("bark.color", "#420..#864"),
    ]);

    let mut grove: Vec<Entity> = vec![
        Entity::new(10, "oak", "tree"),
        Entity::new(11, "pine", "tree"),
        Entity::new(12, "boulder", "rock"),
        Entity::new(13, "birch", "tree"),
    ]
    .into_iter()
    .map(|entity| {
        entity
            .with("height", AttrValue::Number(2.0))
            .with("bark.color", AttrValue::str("#553311"))
    })
    .collect();

    println!("\nchildren matching `tree`, seed 0:");
    forest.randomize_children(grove.iter_mut().map(|entity| entity as &mut dyn Target));
    for entity in &grove {
        entity.report();
    }

    // A late arrival: re-running the pass rolls only the new child.
    grove.push(
        Entity::new(14, "sapling", "tree")
            .with("height", AttrValue::Number(0.5))
            .with("bark.color", AttrValue::str("#553311")),
    );
    println!("\nafter a new child appears:");
    forest.randomize_children(grove.iter_mut().map(|entity| entity as &mut dyn Target));
    for entity in &grove {
        entity.report();
    }
}
