//! Declarative shape records: a shape is a fixed kind plus a mapping of named attributes, built
//! in one step by sampling defaults and merging caller overrides on top.

use std::collections::HashMap;

use rand::Rng;

use crate::sample::{self, Canvas, Paint};
use crate::{Coord, Scalar};

/// The kind of shape a [`ShapeValue`] describes.  Stamped once at construction and never
/// altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Polygon,
}

/// A single tagged attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue<N> {
    Str(String),
    Float(N),
    Bool(bool),
    Color(Paint),
    Points(Vec<Coord<N>>),
}

/// A complete shape record.  Every required attribute is present after construction (defaults
/// are supplied for anything the caller didn't override), and the record is immutable
/// thereafter - only read-only accessors are exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeValue<N> {
    shape_type: ShapeType,
    attrs: HashMap<String, AttrValue<N>>,
}

impl<N> ShapeValue<N> {
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn attrs(&self) -> &HashMap<String, AttrValue<N>> {
        &self.attrs
    }

    /// Looks up an attribute by name
    pub fn get(&self, name: &str) -> Option<&AttrValue<N>> {
        self.attrs.get(name)
    }
}

/// The attribute names every polygon record carries
pub const POLYGON_ATTRS: [&str; 10] = [
    "name",
    "style",
    "strokeWidth",
    "strokeStyle",
    "strokeColor",
    "strokeDasharray",
    "fillColor",
    "scale",
    "points",
    "ensureOnCanvas",
];

/// Returns a fresh attribute map with one default per polygon attribute.  The fill colour is
/// drawn from the colour sampler; everything else is fixed.  `canvas` is only read, to place the
/// default outline.
pub fn sample_polygon_defaults<N: Scalar>(
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> HashMap<String, AttrValue<N>> {
    let mut attrs = HashMap::new();
    attrs.insert("name".to_string(), AttrValue::Str("polygon".to_string()));
    attrs.insert("style".to_string(), AttrValue::Str(sample::default_string()));
    attrs.insert(
        "strokeWidth".to_string(),
        AttrValue::Float(sample::default_float(1.0)),
    );
    attrs.insert(
        "strokeStyle".to_string(),
        AttrValue::Str("solid".to_string()),
    );
    attrs.insert(
        "strokeColor".to_string(),
        AttrValue::Color(sample::no_paint()),
    );
    attrs.insert(
        "strokeDasharray".to_string(),
        AttrValue::Str(sample::default_string()),
    );
    attrs.insert(
        "fillColor".to_string(),
        AttrValue::Color(sample::sample_color(rng)),
    );
    attrs.insert(
        "scale".to_string(),
        AttrValue::Float(sample::default_float(1.0)),
    );
    attrs.insert(
        "points".to_string(),
        AttrValue::Points(sample::default_points(canvas)),
    );
    attrs.insert(
        "ensureOnCanvas".to_string(),
        AttrValue::Bool(sample::default_bool()),
    );
    attrs
}

/// Creates a complete polygon record: defaults first, then a shallow merge of `overrides` on top
/// (an override wins per key; keys the defaults don't know about are copied through unchanged -
/// schema enforcement belongs to the caller's type system, not this crate).
pub fn make_polygon<N: Scalar>(
    canvas: &Canvas,
    rng: &mut impl Rng,
    overrides: HashMap<String, AttrValue<N>>,
) -> ShapeValue<N> {
    let mut attrs = sample_polygon_defaults(canvas, rng);
    attrs.extend(overrides);
    ShapeValue {
        shape_type: ShapeType::Polygon,
        attrs,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(200.0, 100.0)
    }

    #[test]
    fn defaults_cover_every_attribute() {
        let defaults = sample_polygon_defaults::<f32>(&canvas(), &mut ChaCha8Rng::seed_from_u64(0));
        for name in &POLYGON_ATTRS {
            assert!(defaults.contains_key(*name), "missing default for {}", name);
        }
        assert_eq!(defaults.len(), POLYGON_ATTRS.len());
    }

    #[test]
    fn overrides_win_and_unspecified_keys_keep_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert("strokeWidth".to_string(), AttrValue::Float(4.0));
        overrides.insert("name".to_string(), AttrValue::Str("roof".to_string()));

        // The factory and the reference defaults see identically seeded rngs, so the sampled
        // fill colours agree
        let shape = make_polygon(
            &canvas(),
            &mut ChaCha8Rng::seed_from_u64(7),
            overrides.clone(),
        );
        let defaults = sample_polygon_defaults::<f32>(&canvas(), &mut ChaCha8Rng::seed_from_u64(7));

        assert_eq!(shape.get("strokeWidth"), Some(&AttrValue::Float(4.0)));
        assert_eq!(shape.get("name"), Some(&AttrValue::Str("roof".to_string())));
        for (name, default_value) in &defaults {
            if !overrides.contains_key(name) {
                assert_eq!(shape.get(name), Some(default_value));
            }
        }
    }

    #[test]
    fn unrecognized_override_keys_are_copied_through() {
        let mut overrides = HashMap::new();
        overrides.insert("glow".to_string(), AttrValue::Bool(false));

        let shape = make_polygon::<f32>(&canvas(), &mut ChaCha8Rng::seed_from_u64(1), overrides);
        assert_eq!(shape.get("glow"), Some(&AttrValue::Bool(false)));
        assert_eq!(shape.attrs().len(), POLYGON_ATTRS.len() + 1);
    }

    #[test]
    fn shape_type_is_stamped() {
        let shape =
            make_polygon::<f32>(&canvas(), &mut ChaCha8Rng::seed_from_u64(2), HashMap::new());
        assert_eq!(shape.shape_type(), ShapeType::Polygon);
    }
}
