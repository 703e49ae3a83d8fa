//! Stencil Eval - runtime values, filters, format cache and interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: the context a template is evaluated against
//! - [`runtime`]: the filter functions, shared with emitted source
//! - [`Stage`]: a filter invocation resolved at compile time
//! - [`FormatCache`]: shared `number`/`time` formatters keyed by pattern
//! - [`Plan`]: the interpreter's view of a compiled template

pub mod filters;
pub mod format;
pub mod format_cache;
pub mod interpreter;
pub mod runtime;
mod value;

pub use filters::Stage;
pub use format::{FormatError, Formatter, NumberFormat, TimeFormat};
pub use format_cache::FormatCache;
pub use interpreter::Plan;
pub use runtime::{PadSide, TruncateSide};
pub use value::Value;
