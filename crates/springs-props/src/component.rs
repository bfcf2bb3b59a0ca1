//! Component wrapper factory: widened prop bags, conformance checking,
//! animated-value resolution, and opaque ref forwarding.
//!
//! The wrapper owns the transformed schema and, on render, validates the
//! supplied bag, resolves every animated entry to its current literal via
//! `get_value()`, and delegates to the wrapped component together with
//! the untouched ref handle. The scroll-offset props are deliberately
//! *not* resolved: the renderer applies them by mutating the host node
//! directly, so they are exposed as raw animated values instead.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::PropError;
use crate::schema::{PropField, PropSchema, PropShape};
use crate::transform::{animate_schema, SCROLL_LEFT, SCROLL_TOP};
use springs_core::{AnimatedValue, Value, ValueKind};

/// Opaque reference to the underlying host node. The wrapper passes it
/// through unchanged; only the renderer interprets it.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RefHandle(pub u64);

/// A supplied prop: a literal, a live animated value, or a nested bag
/// (the style record).
#[derive(Clone, Debug)]
pub enum PropValue {
    Literal(Value),
    Spring(AnimatedValue),
    Nested(PropBag),
}

/// The widened prop bag a wrapped component accepts.
#[derive(Clone, Debug, Default)]
pub struct PropBag {
    entries: HashMap<String, PropValue>,
}

impl PropBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: PropValue) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The two scroll offsets, if supplied, as raw animated values for
    /// direct host-node mutation (left, top).
    pub fn scroll_offsets(&self) -> (Option<&AnimatedValue>, Option<&AnimatedValue>) {
        let spring = |name: &str| match self.entries.get(name) {
            Some(PropValue::Spring(av)) => Some(av),
            _ => None,
        };
        (spring(SCROLL_LEFT), spring(SCROLL_TOP))
    }

    /// Resolve every entry to its current literal. Scroll offsets are
    /// skipped at the top level (see [`PropBag::scroll_offsets`]).
    pub fn resolve(&self) -> ResolvedProps {
        self.resolve_inner(true)
    }

    fn resolve_inner(&self, skip_scroll: bool) -> ResolvedProps {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            if skip_scroll && (name == SCROLL_LEFT || name == SCROLL_TOP) {
                continue;
            }
            entries.insert(name.clone(), resolve_value(value));
        }
        ResolvedProps { entries }
    }
}

fn resolve_value(value: &PropValue) -> ResolvedProp {
    match value {
        PropValue::Literal(v) => ResolvedProp::Value(v.clone()),
        PropValue::Spring(av) => ResolvedProp::Value(av.get_value()),
        PropValue::Nested(bag) => ResolvedProp::Record(bag.resolve_inner(false)),
    }
}

/// A fully-resolved prop: nothing animated remains below this point.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedProp {
    Value(Value),
    Record(ResolvedProps),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedProps {
    entries: HashMap<String, ResolvedProp>,
}

impl ResolvedProps {
    pub fn get(&self, name: &str) -> Option<&ResolvedProp> {
        self.entries.get(name)
    }

    /// Shortcut for scalar props: the resolved literal, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.entries.get(name) {
            Some(ResolvedProp::Value(v)) => Some(v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check a supplied bag against a widened schema. Unknown names, missing
/// required fields, and literal/animated mismatches all fail here, before
/// anything reaches the underlying component.
pub fn validate_props(schema: &PropSchema, props: &PropBag) -> Result<(), PropError> {
    validate_record(&schema.fields, props)
}

fn validate_record(fields: &[PropField], bag: &PropBag) -> Result<(), PropError> {
    for (name, value) in &bag.entries {
        let field = fields
            .iter()
            .find(|f| f.name == *name)
            .ok_or_else(|| PropError::UnknownProp(name.clone()))?;
        conforms(name, &field.shape, value)?;
    }
    for field in fields {
        if !field.optional && !bag.entries.contains_key(&field.name) {
            return Err(PropError::MissingProp(field.name.clone()));
        }
    }
    Ok(())
}

fn conforms(name: &str, shape: &PropShape, value: &PropValue) -> Result<(), PropError> {
    match (shape, value) {
        (PropShape::Animatable(inner), PropValue::Spring(av)) => spring_matches(name, inner, av),
        (PropShape::Animatable(inner), other) => conforms(name, inner, other),
        (PropShape::Animated(inner), PropValue::Spring(av)) => spring_matches(name, inner, av),
        (PropShape::Animated(_), _) => Err(PropError::AnimatedRequired { name: name.into() }),
        (PropShape::Number, PropValue::Literal(Value::Number(_))) => Ok(()),
        (PropShape::Text, PropValue::Literal(Value::Text(_))) => Ok(()),
        (PropShape::Opaque(_), PropValue::Literal(_)) => Ok(()),
        (PropShape::Record(fields), PropValue::Nested(bag)) => validate_record(fields, bag),
        (PropShape::Record(_), _) => Err(PropError::NotARecord { name: name.into() }),
        (_, PropValue::Spring(_)) => Err(PropError::AnimatedNotAllowed { name: name.into() }),
        (shape, _) => Err(PropError::LiteralMismatch {
            name: name.into(),
            shape: shape.clone(),
        }),
    }
}

fn spring_matches(name: &str, inner: &PropShape, av: &AnimatedValue) -> Result<(), PropError> {
    let ok = matches!(
        (inner, av.kind()),
        (PropShape::Number, ValueKind::Number) | (PropShape::Text, ValueKind::Text)
    );
    if ok {
        Ok(())
    } else {
        Err(PropError::AnimatedKindMismatch {
            name: name.into(),
            shape: inner.clone(),
            got: av.kind(),
        })
    }
}

/// The external renderer's seam: a component declares its prop schema and
/// receives the forwarded handle plus fully-resolved literal props.
pub trait HostComponent {
    fn prop_schema(&self) -> PropSchema;

    fn mount(&self, handle: &RefHandle, props: &ResolvedProps);
}

/// A wrapped component accepting the widened prop shape.
pub struct Animated<C: HostComponent> {
    inner: C,
    schema: PropSchema,
}

impl<C: HostComponent> Animated<C> {
    /// Wrap a component, deriving its widened schema once.
    pub fn wrap(inner: C) -> Self {
        let schema = animate_schema(&inner.prop_schema());
        log::debug!(
            "wrapped component: {} props accept animated values",
            schema.fields.len()
        );
        Self { inner, schema }
    }

    /// The widened schema this wrapper accepts.
    pub fn schema(&self) -> &PropSchema {
        &self.schema
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Validate the bag, resolve animated entries to literals, and hand
    /// everything to the wrapped component with the handle untouched.
    /// Resolution happens on the calling tick; caching across ticks is
    /// the scheduler's contract.
    pub fn render(&self, handle: &RefHandle, props: &PropBag) -> Result<(), PropError> {
        validate_props(&self.schema, props)?;
        let resolved = props.resolve();
        self.inner.mount(handle, &resolved);
        Ok(())
    }
}
