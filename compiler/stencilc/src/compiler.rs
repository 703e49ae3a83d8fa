//! Compiler entry point with explicit configuration.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use stencil_codegen::DEFAULT_CONTEXT_PARAM;
use stencil_diagnostic::CompileResult;
use stencil_eval::{FormatCache, Plan};

use crate::compiled::CompiledTemplate;

/// Settings shared by every template a [`Compiler`] builds.
#[derive(Clone, Debug)]
pub struct CompilerOptions {
    /// Name of the context binding in emitted source.
    pub context_param: String,
    /// Where `number` and `time` formatters are looked up and stored.
    pub cache: Arc<FormatCache>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            context_param: DEFAULT_CONTEXT_PARAM.to_string(),
            cache: FormatCache::global(),
        }
    }
}

/// Compiles templates against one format cache.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    /// A compiler using the process-wide cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompilerOptions) -> Self {
        Compiler { options }
    }

    /// A compiler with its own cache, isolated from the process-wide one.
    pub fn with_cache(cache: Arc<FormatCache>) -> Self {
        Compiler::with_options(CompilerOptions {
            cache,
            ..CompilerOptions::default()
        })
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<FormatCache> {
        &self.options.cache
    }

    pub fn compile(&self, source: &str) -> CompileResult<CompiledTemplate> {
        let ir = stencil_parse::parse_template(source)?;
        let plan = Plan::build(&ir, &self.options.cache)?;
        tracing::debug!(
            segments = ir.segments.len(),
            interpolations = plan.interpolation_count(),
            "compiled template"
        );
        Ok(CompiledTemplate::new(source.to_string(), ir, plan))
    }

    /// Emit Rust source using the configured context binding.
    pub fn emit_source(
        &self,
        source: &str,
        collected: Option<&mut FxHashSet<String>>,
    ) -> CompileResult<String> {
        stencil_codegen::emit_source(
            source,
            Some(self.options.context_param.as_str()),
            collected,
            &self.options.cache,
        )
    }
}
