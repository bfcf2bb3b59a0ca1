//! The animatable prop-shape transform.
//!
//! A pure, total, deterministic mapping over a declared [`PropSchema`]:
//! scalar fields widen to literal-or-animated, the `style` record widens
//! its own scalar fields the same way, `children` is forced to animatable
//! text, everything else passes through verbatim, and the two synthetic
//! scroll-offset props are injected last. Applying the transform to an
//! already transformed schema is unsupported.

use crate::schema::{PropField, PropSchema, PropShape};

/// Synthetic prop: horizontal scroll offset, driven by direct host-node
/// mutation rather than declarative prop assignment.
pub const SCROLL_LEFT: &str = "scrollLeft";
/// Synthetic prop: vertical scroll offset.
pub const SCROLL_TOP: &str = "scrollTop";
/// The designated nested record that widens recursively.
pub const STYLE: &str = "style";
/// The designated text-content prop.
pub const CHILDREN: &str = "children";

/// Derive the widened (animatable) schema from a declared one.
pub fn animate_schema(schema: &PropSchema) -> PropSchema {
    let mut fields: Vec<PropField> = schema
        .fields
        .iter()
        .filter(|f| f.name != SCROLL_LEFT && f.name != SCROLL_TOP)
        .map(widen_field)
        .collect();
    for name in [SCROLL_LEFT, SCROLL_TOP] {
        fields.push(PropField {
            name: name.into(),
            shape: PropShape::animated(PropShape::Number),
            optional: true,
        });
    }
    PropSchema { fields }
}

fn widen_field(field: &PropField) -> PropField {
    let shape = if field.name == CHILDREN {
        // Literal text content or an animated string, whatever was declared.
        PropShape::animatable(PropShape::Text)
    } else if field.name == STYLE {
        widen_style(&field.shape)
    } else {
        widen_scalar(&field.shape)
    };
    PropField {
        name: field.name.clone(),
        shape,
        optional: field.optional,
    }
}

/// Scalar shapes widen; everything else passes through untouched.
fn widen_scalar(shape: &PropShape) -> PropShape {
    match shape {
        PropShape::Number | PropShape::Text => PropShape::animatable(shape.clone()),
        other => other.clone(),
    }
}

/// The style record widens each of its own scalar fields; non-record
/// style declarations get the plain scalar rule.
fn widen_style(shape: &PropShape) -> PropShape {
    match shape {
        PropShape::Record(fields) => PropShape::Record(
            fields
                .iter()
                .map(|f| PropField {
                    name: f.name.clone(),
                    shape: widen_scalar(&f.shape),
                    optional: f.optional,
                })
                .collect(),
        ),
        other => widen_scalar(other),
    }
}
