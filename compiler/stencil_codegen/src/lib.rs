//! Stencil Codegen - emits Rust source for compiled templates.
//!
//! The emitted text is a block expression of type `String` over a context
//! binding (default `obj`, a `&stencil_eval::Value`). It calls the same
//! `stencil_eval::runtime` functions the interpreter uses and reads
//! `number`/`time` formatters from a `__formats` slice indexed by their
//! position in the [`FormatCache`]'s entries. Emission never runs the code.
//!
//! ```text
//! {{name|upper}}!   =>   {
//!                            let mut __out = ::std::string::String::with_capacity(1);
//!                            {
//!                                let __v: &::stencil_eval::Value = ::stencil_eval::runtime::lookup(obj, &["name"]);
//!                                let __v = &::stencil_eval::runtime::upper(__v);
//!                                ::stencil_eval::runtime::render(__v, &mut __out);
//!                            }
//!                            __out.push_str("!");
//!                            __out
//!                        }
//! ```

mod emitter;

use rustc_hash::FxHashSet;
use stencil_diagnostic::{CompileError, CompileErrorKind, CompileResult};
use stencil_eval::FormatCache;
use stencil_ir::{Span, TemplateIr};

use emitter::Emitter;

/// Context binding used when none is given.
pub const DEFAULT_CONTEXT_PARAM: &str = "obj";

/// Rust keywords that cannot name the context binding.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "_",
];

/// Parse `source` and emit it.
///
/// See [`emit_ir`].
pub fn emit_source(
    source: &str,
    context_param: Option<&str>,
    collected: Option<&mut FxHashSet<String>>,
    cache: &FormatCache,
) -> CompileResult<String> {
    let ir = stencil_parse::parse_template(source)?;
    emit_ir(&ir, context_param, collected, cache)
}

/// Emit an already-parsed template.
///
/// When `collected` is given, each distinct top-level property name the
/// template reads is inserted into it. Formatters the template needs are
/// added to `cache` if absent.
pub fn emit_ir(
    ir: &TemplateIr,
    context_param: Option<&str>,
    collected: Option<&mut FxHashSet<String>>,
    cache: &FormatCache,
) -> CompileResult<String> {
    let param = context_param.unwrap_or(DEFAULT_CONTEXT_PARAM);
    if !is_context_param(param) {
        return Err(CompileError::new(
            CompileErrorKind::InvalidContextParam {
                name: param.to_string(),
            },
            Span::point(0),
        ));
    }

    let source = Emitter::new(cache, param).emit_template(ir)?;

    if let Some(collected) = collected {
        collected.extend(ir.root_names().into_iter().map(str::to_string));
    }

    tracing::debug!(
        param,
        segments = ir.segments.len(),
        bytes = source.len(),
        "emitted template source"
    );
    Ok(source)
}

/// Whether `name` can bind the context in emitted code.
///
/// Names starting with `__` are reserved for emitted locals.
fn is_context_param(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with("__")
        && !KEYWORDS.contains(&name)
}
