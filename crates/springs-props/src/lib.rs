//! springs-props: animatable prop schemas and component wrapping.
//!
//! Given a UI component's declared prop schema, this crate derives the
//! widened schema in which every scalar prop may alternatively be driven
//! by an `AnimatedValue` (recursively through the `style` record, with
//! `children` specialized to text and two synthetic scroll-offset props
//! injected), and provides the wrapper that validates widened prop bags,
//! resolves animated entries to literals, and forwards an opaque ref
//! handle to the underlying component.

pub mod component;
pub mod error;
pub mod schema;
pub mod transform;

// Re-exports for consumers (renderers/adapters)
pub use component::{
    validate_props, Animated, HostComponent, PropBag, PropValue, RefHandle, ResolvedProp,
    ResolvedProps,
};
pub use error::PropError;
pub use schema::{PropField, PropSchema, PropShape};
pub use transform::{animate_schema, CHILDREN, SCROLL_LEFT, SCROLL_TOP, STYLE};
