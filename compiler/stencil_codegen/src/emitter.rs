//! Emission state and per-segment rendering.

use stencil_diagnostic::{CompileError, CompileResult};
use stencil_eval::{FormatCache, PadSide, Stage, TruncateSide};
use stencil_ir::{Interpolation, Segment, Span, TemplateIr};

/// Path to the runtime module in emitted code.
const RUNTIME: &str = "::stencil_eval::runtime";

/// Accumulates emitted source for one template.
pub(crate) struct Emitter<'a> {
    cache: &'a FormatCache,
    context_param: &'a str,
    /// Current indentation level.
    indent: usize,
    output: String,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(cache: &'a FormatCache, context_param: &'a str) -> Self {
        Emitter {
            cache,
            context_param,
            indent: 0,
            output: String::with_capacity(512),
        }
    }

    /// Emit the whole template as a block expression producing a `String`.
    pub(crate) fn emit_template(mut self, ir: &TemplateIr) -> CompileResult<String> {
        self.line("{");
        self.indent += 1;
        self.line(&format!(
            "let mut __out = ::std::string::String::with_capacity({});",
            ir.literal_len()
        ));
        for segment in &ir.segments {
            match segment {
                Segment::Literal { text, .. } => {
                    self.line(&format!("__out.push_str({});", string_literal(text)));
                }
                Segment::Interpolation(interp) => self.emit_interpolation(interp)?,
            }
        }
        self.line("__out");
        self.indent -= 1;
        self.line("}");
        // No trailing newline after the closing brace.
        self.output.pop();
        Ok(self.output)
    }

    fn emit_interpolation(&mut self, interp: &Interpolation) -> CompileResult<()> {
        let stages = Stage::resolve_all(&interp.pipeline, self.cache)?;

        self.line("{");
        self.indent += 1;
        let path = interp
            .path
            .segments()
            .iter()
            .map(|segment| string_literal(segment))
            .collect::<Vec<_>>()
            .join(", ");
        self.line(&format!(
            "let __v: &::stencil_eval::Value = {RUNTIME}::lookup({}, &[{path}]);",
            self.context_param
        ));
        for (stage, invocation) in stages.iter().zip(&interp.pipeline) {
            let call = self.stage_call(stage, invocation.span)?;
            self.line(&format!("let __v = &{call};"));
        }
        self.line(&format!("{RUNTIME}::render(__v, &mut __out);"));
        self.indent -= 1;
        self.line("}");
        Ok(())
    }

    /// The runtime call for one stage, applied to `__v`.
    fn stage_call(&self, stage: &Stage, span: Span) -> CompileResult<String> {
        let call = match stage {
            Stage::Lower => format!("{RUNTIME}::lower(__v)"),
            Stage::Upper => format!("{RUNTIME}::upper(__v)"),
            Stage::LowerLocale => format!("{RUNTIME}::lower_locale(__v)"),
            Stage::UpperLocale => format!("{RUNTIME}::upper_locale(__v)"),
            Stage::Trim => format!("{RUNTIME}::trim(__v)"),
            Stage::Length => format!("{RUNTIME}::length(__v)"),
            Stage::Left(n) => format!("{RUNTIME}::left(__v, {n})"),
            Stage::Right(n) => format!("{RUNTIME}::right(__v, {n})"),
            Stage::Mid { start, len } => format!("{RUNTIME}::mid(__v, {start}, {len})"),
            Stage::Slice { start, end } => {
                let end = end.map_or_else(|| "None".to_string(), |end| format!("Some({end})"));
                format!("{RUNTIME}::slice(__v, {start}, {end})")
            }
            Stage::Truncate { width, side } => {
                let side = match side {
                    TruncateSide::Right => "Right",
                    TruncateSide::Left => "Left",
                    TruncateSide::Middle => "Middle",
                };
                format!("{RUNTIME}::truncate(__v, {width}, {RUNTIME}::TruncateSide::{side})")
            }
            Stage::Pad { width, side } => {
                let side = match side {
                    PadSide::Right => "Right",
                    PadSide::Left => "Left",
                    PadSide::Middle => "Middle",
                };
                format!("{RUNTIME}::pad(__v, {width}, {RUNTIME}::PadSide::{side})")
            }
            Stage::Format(formatter) => {
                // Formatters are addressed by cache position.
                let (index, _) = self
                    .cache
                    .get_or_insert_indexed(formatter.family(), formatter.pattern())
                    .map_err(|err| CompileError::new(err.into(), span))?;
                format!("{RUNTIME}::format(__v, &__formats[{index}])")
            }
        };
        Ok(call)
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}

/// A Rust string literal with the same contents as `text`.
pub(crate) fn string_literal(text: &str) -> String {
    // `Debug` on `str` escapes quotes, backslashes and control characters.
    format!("{text:?}")
}
