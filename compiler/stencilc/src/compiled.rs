//! Compiled templates.

use std::fmt;

use stencil_eval::{Plan, Value};
use stencil_ir::TemplateIr;

/// A template reduced to a plain function of its context.
pub type Evaluator = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// A template that compiled successfully.
///
/// Immutable after construction, so it can be shared across threads and
/// evaluated any number of times.
#[derive(Clone, PartialEq)]
pub struct CompiledTemplate {
    source: String,
    ir: TemplateIr,
    plan: Plan,
}

impl CompiledTemplate {
    pub(crate) fn new(source: String, ir: TemplateIr, plan: Plan) -> Self {
        CompiledTemplate { source, ir, plan }
    }

    /// Render the template against `context`.
    pub fn evaluate(&self, context: &Value) -> String {
        self.plan.evaluate(context)
    }

    /// Append the rendered template to `out`.
    pub fn evaluate_into(&self, context: &Value, out: &mut String) {
        self.plan.evaluate_into(context, out);
    }

    /// Consume the template into a boxed closure.
    pub fn into_evaluator(self) -> Evaluator {
        Box::new(move |context| self.evaluate(context))
    }

    /// Distinct top-level property names, in order of first use.
    pub fn referenced_properties(&self) -> Vec<&str> {
        self.ir.root_names()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ir(&self) -> &TemplateIr {
        &self.ir
    }

    /// Whether the output is the same for every context.
    pub fn is_static(&self) -> bool {
        self.ir.is_static()
    }
}

impl fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledTemplate")
            .field("source", &self.source)
            .field("interpolations", &self.plan.interpolation_count())
            .finish_non_exhaustive()
    }
}
