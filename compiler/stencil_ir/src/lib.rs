//! Stencil IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by every phase of
//! the template compiler:
//! - Spans for source locations inside a template string
//! - The segment sequence a template compiles to ([`TemplateIr`])
//! - Property paths, filter invocations and their typed arguments
//! - The fixed set of filter kinds ([`FilterKind`])
//! - The numeric format pattern grammar ([`format_spec`])
//!
//! # Design Philosophy
//!
//! - **One IR, many consumers**: the interpreter evaluates it, the source
//!   emitter serializes it. Nothing re-parses template text after the
//!   parser has run.
//! - **Tagged arguments**: filter arguments are classified once, at parse
//!   time, into [`Arg`] variants.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod filter_kind;
pub mod format_spec;
mod span;
mod template;

pub use filter_kind::{FilterKind, FormatFamily};
pub use span::{Span, SpanError};
pub use template::{Arg, FilterInvocation, Interpolation, PropertyPath, Segment, TemplateIr};
