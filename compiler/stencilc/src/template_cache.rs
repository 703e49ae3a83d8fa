//! Memoized compilation keyed by template source.
//!
//! Same locking discipline as the format cache: a read-lock fast path,
//! then a double-check under the write lock before compiling.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use stencil_diagnostic::CompileResult;

use crate::compiled::CompiledTemplate;
use crate::compiler::Compiler;

/// Compiled templates shared by source text.
///
/// Failed compilations are not stored, so each attempt reports its error.
pub struct TemplateCache {
    compiler: Compiler,
    templates: RwLock<FxHashMap<String, Arc<CompiledTemplate>>>,
}

impl TemplateCache {
    pub fn new(compiler: Compiler) -> Self {
        TemplateCache {
            compiler,
            templates: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn get_or_compile(&self, source: &str) -> CompileResult<Arc<CompiledTemplate>> {
        // Fast path: already compiled
        if let Some(template) = self.templates.read().get(source) {
            return Ok(Arc::clone(template));
        }

        let mut templates = self.templates.write();

        // Double-check after acquiring write lock
        if let Some(template) = templates.get(source) {
            return Ok(Arc::clone(template));
        }

        let template = Arc::new(self.compiler.compile(source)?);
        templates.insert(source.to_string(), Arc::clone(&template));
        Ok(template)
    }

    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.templates.write().clear();
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new(Compiler::new())
    }
}

impl fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCache")
            .field("templates", &self.len())
            .finish_non_exhaustive()
    }
}
