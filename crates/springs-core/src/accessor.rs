//! Value accessor contract and the root mutable holder.
//!
//! `ValueSource` is the minimal "thing that currently holds a value"
//! interface; it is pulled every scheduler tick, so implementations must
//! be cheap and side-effect free. `ValueCell` is the only mutable state
//! in the core: the external scheduler writes it, everything downstream
//! only reads. Single-threaded, tick-driven; sharing is via `Rc`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SpringError;
use crate::value::{Value, ValueKind};

/// Pull-based accessor for the current value of a known shape.
pub trait ValueSource {
    /// The shape of values this source produces; fixed at construction.
    fn kind(&self) -> ValueKind;

    /// Read the current value. Hot per-frame path: no blocking, no
    /// unbounded allocation, callable any number of times per tick.
    fn get_value(&self) -> Value;
}

/// Root value holder written by the scheduler between ticks.
///
/// The shape (and, for lists, the element count) is established by the
/// initial value and never changes afterwards.
#[derive(Clone, Debug)]
pub struct ValueCell {
    kind: ValueKind,
    list_len: Option<usize>,
    inner: Rc<RefCell<Value>>,
}

impl ValueCell {
    pub fn new(initial: Value) -> Result<Self, SpringError> {
        initial.validate()?;
        let kind = initial.kind();
        let list_len = match &initial {
            Value::List(items) => Some(items.len()),
            _ => None,
        };
        Ok(Self {
            kind,
            list_len,
            inner: Rc::new(RefCell::new(initial)),
        })
    }

    /// Scheduler write path. The new value must match the cell's shape;
    /// list cells additionally keep their element count.
    pub fn set(&self, next: Value) -> Result<(), SpringError> {
        next.validate()?;
        if next.kind() != self.kind {
            return Err(SpringError::ShapeMismatch {
                expected: self.kind,
                got: next.kind(),
            });
        }
        if let (Some(expected), Value::List(items)) = (self.list_len, &next) {
            if items.len() != expected {
                return Err(SpringError::LengthChanged {
                    expected,
                    got: items.len(),
                });
            }
        }
        *self.inner.borrow_mut() = next;
        Ok(())
    }
}

impl ValueSource for ValueCell {
    #[inline]
    fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    fn get_value(&self) -> Value {
        self.inner.borrow().clone()
    }
}
