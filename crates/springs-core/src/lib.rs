//! springs-core: animated values and interpolation (renderer-agnostic)
//!
//! This crate holds the reactive value model used to drive per-frame UI
//! property updates without re-rendering:
//! - `Value`/`ValueKind`: the runtime value shapes (number, text, list).
//! - `ValueSource`/`ValueCell`: the pull-based accessor contract and the
//!   root holder the external scheduler writes each tick.
//! - `interp`: range/extrapolation configuration and the tagged
//!   interpolation dispatch.
//! - `AnimatedValue`: the public reactive value with an immutable
//!   derivation lineage.
//! - `color`: the default string/color blending collaborator.

pub mod accessor;
pub mod animated;
pub mod color;
pub mod error;
pub mod interp;
pub mod json;
pub mod value;

// Re-exports for consumers (wrappers/adapters)
pub use accessor::{ValueCell, ValueSource};
pub use animated::AnimatedValue;
pub use error::SpringError;
pub use interp::{Extrapolate, InterpolateSpec, InterpolationRange, OutputValue, RangeConfig};
pub use json::{parse_range_config_json, JsonError};
pub use value::{Value, ValueKind};
