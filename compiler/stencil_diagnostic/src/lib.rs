//! Stencil Diagnostic - compile errors for the template compiler.
//!
//! Every structural problem in a template is reported at compile time as a
//! [`CompileError`]: a typed [`CompileErrorKind`], the [`Span`] of template
//! source it refers to, and a stable [`ErrorCode`]. Evaluation never
//! produces these.
//!
//! [`CompileError::render`] turns an error into a labelled source snippet.

mod error;
mod error_code;

pub use error::{CompileError, CompileErrorKind, CompileResult};
pub use error_code::ErrorCode;
pub use stencil_ir::Span;
