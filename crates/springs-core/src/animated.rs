//! The public reactive value: a root cell plus an immutable chain of
//! interpolation derivations.
//!
//! Every `interpolate` call produces a new `AnimatedValue` whose lineage
//! includes the receiver; receivers are never mutated, so values form a
//! directed acyclic chain that multiple consumers can share. Evaluation
//! walks the lineage from the root on every read; caching across ticks is
//! the scheduler's business, not ours.

use std::rc::Rc;

use crate::accessor::{ValueCell, ValueSource};
use crate::error::SpringError;
use crate::interp::InterpolateSpec;
use crate::value::{Value, ValueKind};

#[derive(Clone, Debug)]
pub struct AnimatedValue {
    node: Rc<Node>,
}

#[derive(Debug)]
enum Node {
    /// Root: owns the cell the scheduler writes.
    Source(ValueCell),
    /// One derivation step applied to an upstream value.
    Derived {
        upstream: AnimatedValue,
        step: InterpolateSpec,
        kind: ValueKind,
    },
}

impl AnimatedValue {
    /// Create a root value from an initial literal.
    pub fn new(initial: Value) -> Result<Self, SpringError> {
        Ok(Self::from_cell(ValueCell::new(initial)?))
    }

    /// Wrap an existing cell. Lets the scheduler keep its own handle to
    /// the same underlying slot (cells share state when cloned).
    pub fn from_cell(cell: ValueCell) -> Self {
        Self {
            node: Rc::new(Node::Source(cell)),
        }
    }

    /// The output shape of this node; fixed at construction.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match &*self.node {
            Node::Source(cell) => cell.kind(),
            Node::Derived { kind, .. } => *kind,
        }
    }

    /// Whether this is a root (writable) value.
    pub fn is_root(&self) -> bool {
        matches!(&*self.node, Node::Source(_))
    }

    /// Scheduler write path; only roots accept writes.
    pub fn set(&self, next: Value) -> Result<(), SpringError> {
        match &*self.node {
            Node::Source(cell) => cell.set(next),
            Node::Derived { .. } => Err(SpringError::WriteToDerived),
        }
    }

    /// Evaluate the lineage left-to-right from the root. Panics raised by
    /// user-supplied step functions propagate to the caller unmodified.
    pub fn get_value(&self) -> Value {
        match &*self.node {
            Node::Source(cell) => cell.get_value(),
            Node::Derived { upstream, step, .. } => step.apply(&upstream.get_value()),
        }
    }

    /// Derive a new value by applying `spec` to this one. The receiver is
    /// untouched; shape mismatches fail here rather than on later reads.
    pub fn interpolate(&self, spec: InterpolateSpec) -> Result<AnimatedValue, SpringError> {
        let kind = match &spec {
            InterpolateSpec::Range(range) => {
                if self.kind() != ValueKind::Number {
                    return Err(SpringError::NonNumericInput(self.kind()));
                }
                range.output_kind()
            }
            InterpolateSpec::Elements(_) => {
                if self.kind() != ValueKind::List {
                    return Err(SpringError::SpreadOnScalar(self.kind()));
                }
                self.probe_step(&spec)?
            }
            InterpolateSpec::Function(_) => self.probe_step(&spec)?,
        };
        Ok(Self {
            node: Rc::new(Node::Derived {
                upstream: self.clone(),
                step: spec,
                kind,
            }),
        })
    }

    /// Establish a function step's output shape by evaluating it once
    /// against the current value, so malformed steps surface now instead
    /// of mid-animation. Steps must be pure, so the extra call is free of
    /// observable effects.
    fn probe_step(&self, spec: &InterpolateSpec) -> Result<ValueKind, SpringError> {
        let probe = spec.apply(&self.get_value());
        probe.validate()?;
        Ok(probe.kind())
    }
}

impl ValueSource for AnimatedValue {
    fn kind(&self) -> ValueKind {
        AnimatedValue::kind(self)
    }

    fn get_value(&self) -> Value {
        AnimatedValue::get_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should reject writes through derived values
    #[test]
    fn derived_values_are_read_only() {
        let root = AnimatedValue::new(Value::n(0.0)).unwrap();
        let derived = root
            .interpolate(InterpolateSpec::func(|v| Value::n(v.as_number() * 2.0)))
            .unwrap();
        assert!(root.is_root());
        assert!(!derived.is_root());
        assert!(matches!(
            derived.set(Value::n(1.0)),
            Err(SpringError::WriteToDerived)
        ));
    }

    /// it should re-evaluate the lineage on every read
    #[test]
    fn lineage_follows_root_writes() {
        let root = AnimatedValue::new(Value::n(1.0)).unwrap();
        let double = root
            .interpolate(InterpolateSpec::func(|v| Value::n(v.as_number() * 2.0)))
            .unwrap();
        assert_eq!(double.get_value(), Value::n(2.0));
        root.set(Value::n(5.0)).unwrap();
        assert_eq!(double.get_value(), Value::n(10.0));
    }
}
