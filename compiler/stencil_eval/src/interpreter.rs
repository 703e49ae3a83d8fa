//! Tree-walking evaluator over a resolved template.
//!
//! A [`Plan`] is built once from the IR: literal text is kept as-is and
//! every interpolation's filters are resolved into [`Stage`]s. Evaluating
//! a plan walks its parts left to right and never fails.

use std::borrow::Cow;

use stencil_diagnostic::CompileResult;
use stencil_ir::{Segment, TemplateIr};

use crate::filters::Stage;
use crate::format_cache::FormatCache;
use crate::runtime;
use crate::value::Value;

/// Evaluation plan for one template.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    parts: Vec<Part>,
    /// Total literal bytes, used to presize the output.
    literal_len: usize,
}

#[derive(Clone, Debug, PartialEq)]
enum Part {
    Literal(String),
    Interpolation { path: Vec<String>, stages: Vec<Stage> },
}

impl Plan {
    /// Resolve every interpolation of `ir`, fetching formatters from `cache`.
    pub fn build(ir: &TemplateIr, cache: &FormatCache) -> CompileResult<Plan> {
        let parts = ir
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal { text, .. } => Ok(Part::Literal(text.clone())),
                Segment::Interpolation(interp) => Ok(Part::Interpolation {
                    path: interp.path.segments().to_vec(),
                    stages: Stage::resolve_all(&interp.pipeline, cache)?,
                }),
            })
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(Plan {
            parts,
            literal_len: ir.literal_len(),
        })
    }

    pub fn evaluate(&self, context: &Value) -> String {
        let mut out = String::with_capacity(self.literal_len);
        self.evaluate_into(context, &mut out);
        out
    }

    /// Append the rendered template to `out`.
    pub fn evaluate_into(&self, context: &Value, out: &mut String) {
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Interpolation { path, stages } => {
                    let value = run_pipeline(context.lookup(path), stages);
                    runtime::render(&value, out);
                }
            }
        }
    }

    /// Number of interpolations.
    pub fn interpolation_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Interpolation { .. }))
            .count()
    }
}

/// Apply stages left to right. The looked-up value is only cloned if a
/// stage passes it through.
fn run_pipeline<'v>(value: &'v Value, stages: &[Stage]) -> Cow<'v, Value> {
    stages
        .iter()
        .fold(Cow::Borrowed(value), |current, stage| {
            Cow::Owned(stage.apply(&current))
        })
}
