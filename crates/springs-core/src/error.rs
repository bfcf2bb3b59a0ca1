//! Error taxonomy for springs-core.
//!
//! Configuration and shape errors surface at construction time so a
//! malformed interpolation never produces garbage mid-animation.
//! Evaluation itself is infallible; user-supplied step functions that
//! panic propagate to the caller unmodified.

use thiserror::Error;

use crate::value::ValueKind;

#[derive(Debug, Error)]
pub enum SpringError {
    // --- configuration errors ---
    #[error("interpolation range needs at least 2 breakpoints, got {0}")]
    RangeTooShort(usize),

    #[error("breakpoint/output lengths differ: {breakpoints} vs {outputs}")]
    LengthMismatch { breakpoints: usize, outputs: usize },

    #[error("breakpoints must be strictly increasing (violated at index {index})")]
    NonIncreasingBreakpoints { index: usize },

    #[error("range outputs must share one kind: expected {expected:?}, got {got:?} at index {index}")]
    MixedOutputKinds {
        expected: ValueKind,
        got: ValueKind,
        index: usize,
    },

    #[error("string outputs at indices {left} and {right} have incompatible structure")]
    IncompatibleStrings { left: usize, right: usize },

    #[error("range outputs must be numbers or strings, got {0:?}")]
    UnsupportedOutputKind(ValueKind),

    #[error("identity extrapolation is only valid for numeric outputs")]
    IdentityNeedsNumbers,

    // --- shape errors ---
    #[error("lists hold scalar elements, not nested lists")]
    NestedList,

    #[error("value shape is fixed at construction: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: ValueKind, got: ValueKind },

    #[error("list length is fixed at construction: expected {expected}, got {got}")]
    LengthChanged { expected: usize, got: usize },

    #[error("range interpolation reads a numeric input, but the upstream value is {0:?}")]
    NonNumericInput(ValueKind),

    #[error("element-wise interpolation needs a list upstream, but the value is {0:?}")]
    SpreadOnScalar(ValueKind),

    #[error("only root values accept writes; derived values are read-only")]
    WriteToDerived,
}
