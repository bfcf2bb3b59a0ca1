//! Error taxonomy for prop bags checked against a widened schema.

use thiserror::Error;

use crate::schema::PropShape;
use springs_core::ValueKind;

#[derive(Debug, Error)]
pub enum PropError {
    #[error("unknown prop `{0}`")]
    UnknownProp(String),

    #[error("missing required prop `{0}`")]
    MissingProp(String),

    #[error("prop `{name}` does not accept this literal (declared {shape:?})")]
    LiteralMismatch { name: String, shape: PropShape },

    #[error("prop `{name}` does not accept animated values")]
    AnimatedNotAllowed { name: String },

    #[error("prop `{name}` requires an animated value")]
    AnimatedRequired { name: String },

    #[error("prop `{name}`: animated value produces {got:?}, declared {shape:?}")]
    AnimatedKindMismatch {
        name: String,
        shape: PropShape,
        got: ValueKind,
    },

    #[error("prop `{name}` expects a nested record")]
    NotARecord { name: String },
}
