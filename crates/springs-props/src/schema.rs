//! Prop schema (shape) definitions for UI components.

use serde::{Deserialize, Serialize};

/// A named field in a component's prop schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropField {
    pub name: String,
    pub shape: PropShape,
    #[serde(default)]
    pub optional: bool,
}

/// The structural type of a prop value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "id", content = "data", rename_all = "lowercase")]
pub enum PropShape {
    /// Scalar number
    Number,
    /// Scalar string
    Text,
    /// Nested record of fields (e.g. a style bag)
    Record(Vec<PropField>),
    /// Any declared type this crate does not interpret. The payload is a
    /// free-form type label; values of this shape pass through transforms
    /// and resolution verbatim.
    Opaque(String),
    /// A literal of the inner shape, or an animated value producing it.
    Animatable(Box<PropShape>),
    /// An animated value only, no literal form (the synthetic scroll
    /// offsets use this).
    Animated(Box<PropShape>),
}

impl PropShape {
    pub fn animatable(inner: PropShape) -> Self {
        PropShape::Animatable(Box::new(inner))
    }

    pub fn animated(inner: PropShape) -> Self {
        PropShape::Animated(Box::new(inner))
    }
}

/// A component's accepted properties: name -> declared shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropSchema {
    pub fields: Vec<PropField>,
}

impl PropSchema {
    /// Convenience: build a schema from (name, shape) pairs.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<String>, PropShape)>,
    ) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(name, shape)| PropField {
                name: name.into(),
                shape,
                optional: false,
            })
            .collect();
        PropSchema { fields }
    }

    pub fn field(&self, name: &str) -> Option<&PropField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_and_lookup() {
        let schema = PropSchema::from_pairs([
            ("opacity", PropShape::Number),
            ("label", PropShape::Text),
        ]);
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.field("opacity").unwrap().shape, PropShape::Number);
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn shape_serde_roundtrip() {
        let shape = PropShape::animatable(PropShape::Record(vec![PropField {
            name: "color".into(),
            shape: PropShape::Text,
            optional: true,
        }]));
        let s = serde_json::to_string(&shape).unwrap();
        let back: PropShape = serde_json::from_str(&s).unwrap();
        assert_eq!(shape, back);
    }
}
