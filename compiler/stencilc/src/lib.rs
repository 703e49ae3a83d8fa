//! Stencil - compile `{{ }}` templates into reusable evaluators.
//!
//! ```text
//! source ──► tokenizer ──► parser ──► TemplateIr
//!                                        │
//!                         ┌──────────────┴──────────────┐
//!                         ▼                             ▼
//!              Plan (filters resolved,          emit_source ──► Rust text
//!              formatters from the cache)
//!                         │
//!                         ▼
//!                evaluate(&Value) -> String
//! ```
//!
//! Every structural problem is reported by [`compile`] as a
//! [`CompileError`]; evaluation itself never fails.
//!
//! ```
//! use stencilc::Value;
//!
//! let template = stencilc::compile("Hello {{ user.name | upper }}!").unwrap();
//! let context = Value::object([("user", Value::object([("name", "ada")]))]);
//! assert_eq!(template.evaluate(&context), "Hello ADA!");
//! ```

mod compiled;
mod compiler;
mod template_cache;

use std::sync::{Arc, Once};

use rustc_hash::FxHashSet;

pub use compiled::{CompiledTemplate, Evaluator};
pub use compiler::{Compiler, CompilerOptions};
pub use stencil_codegen::DEFAULT_CONTEXT_PARAM;
pub use stencil_diagnostic::{CompileError, CompileErrorKind, CompileResult, ErrorCode};
pub use stencil_eval::{FormatCache, Formatter, Value};
pub use stencil_ir::{FormatFamily, Span, TemplateIr};
pub use template_cache::TemplateCache;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Set `RUST_LOG=stencil_eval=debug` to see cache and fallback events,
/// or `RUST_LOG=stencil_parse=trace` for per-interpolation parsing.
/// Does nothing when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Compile `source` against the process-wide format cache.
pub fn compile(source: &str) -> CompileResult<CompiledTemplate> {
    Compiler::new().compile(source)
}

/// Emit Rust source for `source`.
///
/// `context_param` names the `&Value` binding the code reads from
/// (default [`DEFAULT_CONTEXT_PARAM`]). Top-level property names are
/// added to `collected` when given.
pub fn emit_source(
    source: &str,
    context_param: Option<&str>,
    collected: Option<&mut FxHashSet<String>>,
) -> CompileResult<String> {
    stencil_codegen::emit_source(source, context_param, collected, &FormatCache::global())
}

/// Drop every cached `number` and `time` formatter.
///
/// Already-compiled templates keep working.
pub fn clear_format_cache() {
    FormatCache::global().clear();
}

/// The process-wide format cache, for inspecting its size and contents.
pub fn format_cache() -> Arc<FormatCache> {
    FormatCache::global()
}
