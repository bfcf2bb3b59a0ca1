//! Core value kinds and typed values carried by animated properties.
//! All numeric values use f32.

use serde::{Deserialize, Serialize};

use crate::error::SpringError;

/// Lightweight kind enum for pattern-matching and quick dispatch.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    List,
}

/// Runtime value held behind an animated property.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    /// Scalar number
    Number(f32),

    /// Text / string (blended component-wise through string templates)
    Text(String),

    /// Ordered sequence of scalar values. Elements are Number or Text,
    /// never another List; length is fixed for the lifetime of a cell.
    List(Vec<Value>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Convenience constructors
    pub fn n(v: f32) -> Self {
        Value::Number(v)
    }

    pub fn t(v: impl Into<String>) -> Self {
        Value::Text(v.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Coerce to a scalar f32 (fail-soft):
    /// - Number -> its value
    /// - Text -> 0.0
    /// - List -> first element coerced, or 0.0 if empty
    #[inline]
    pub fn as_number(&self) -> f32 {
        match self {
            Value::Number(v) => *v,
            Value::Text(_) => 0.0,
            Value::List(items) => items.first().map(Value::as_number).unwrap_or(0.0),
        }
    }

    /// Check the list invariant: elements of a List are scalars.
    pub fn validate(&self) -> Result<(), SpringError> {
        if let Value::List(items) = self {
            if items.iter().any(|v| matches!(v, Value::List(_))) {
                return Err(SpringError::NestedList);
            }
        }
        Ok(())
    }
}
