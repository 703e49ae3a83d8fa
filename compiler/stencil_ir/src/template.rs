//! Template segments, property paths and filter invocations.
//!
//! A parsed template is a flat, ordered list of [`Segment`]s. Literal text
//! is kept verbatim; each `{{ ... }}` becomes an [`Interpolation`] holding
//! the property path to read and the filters to apply, in source order.

use std::fmt;

use crate::{FilterKind, Span};

/// A parsed template: literal text interleaved with interpolations.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TemplateIr {
    pub segments: Vec<Segment>,
}

/// One piece of a template.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Text copied to the output unchanged.
    Literal { text: String, span: Span },
    /// A `{{ path | filter ... }}` token.
    Interpolation(Interpolation),
}

/// A single `{{ ... }}` token after parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    pub path: PropertyPath,
    pub pipeline: Vec<FilterInvocation>,
    /// Span of the whole token, delimiters included.
    pub span: Span,
}

/// Dotted sequence of property names, e.g. `a.b` → `["a", "b"]`.
///
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
    span: Span,
}

/// A filter applied to an interpolated value.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterInvocation {
    pub kind: FilterKind,
    pub args: Vec<Arg>,
    /// Span of the filter name.
    pub span: Span,
}

/// A positional filter argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// Quoted literal, content taken verbatim between the quotes.
    Str { value: String, span: Span },
    /// Bare token that parses fully as a number.
    Number { value: f64, span: Span },
    /// Any other bare token (`left`, `middle`, ...).
    Keyword { value: String, span: Span },
}

impl TemplateIr {
    pub fn new(segments: Vec<Segment>) -> Self {
        TemplateIr { segments }
    }

    /// Iterate over the interpolations, skipping literal text.
    pub fn interpolations(&self) -> impl Iterator<Item = &Interpolation> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Interpolation(interp) => Some(interp),
            Segment::Literal { .. } => None,
        })
    }

    /// Whether the template contains no interpolations at all.
    pub fn is_static(&self) -> bool {
        self.interpolations().next().is_none()
    }

    /// Distinct top-level property names, in order of first use.
    pub fn root_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for interp in self.interpolations() {
            let root = interp.path.root();
            if !names.contains(&root) {
                names.push(root);
            }
        }
        names
    }

    /// Total byte length of all literal text.
    pub fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal { text, .. } => text.len(),
                Segment::Interpolation(_) => 0,
            })
            .sum()
    }
}

impl PropertyPath {
    /// Build a path from its segments. Returns `None` for an empty list.
    pub fn new(segments: Vec<String>, span: Span) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(PropertyPath { segments, span })
        }
    }

    /// The first (top-level) property name.
    pub fn root(&self) -> &str {
        // Non-empty by construction.
        self.segments.first().map_or("", String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Arg {
    pub fn span(&self) -> Span {
        match self {
            Arg::Str { span, .. } | Arg::Number { span, .. } | Arg::Keyword { span, .. } => *span,
        }
    }

    /// The argument as a number, if it was written as a bare numeric token.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The argument as text: string literals and keywords both qualify.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Str { value, .. } | Arg::Keyword { value, .. } => Some(value),
            Arg::Number { .. } => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Arg::Str { .. } => "string literal",
            Arg::Number { .. } => "number",
            Arg::Keyword { .. } => "keyword",
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str { value, .. } => {
                let quote = if value.contains('"') { '\'' } else { '"' };
                write!(f, "{quote}{value}{quote}")
            }
            Arg::Number { value, .. } => write!(f, "{value}"),
            Arg::Keyword { value, .. } => f.write_str(value),
        }
    }
}

impl fmt::Display for FilterInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        for (i, arg) in self.args.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.path)?;
        for filter in &self.pipeline {
            write!(f, "|{filter}")?;
        }
        f.write_str("}}")
    }
}

/// Canonical template text: whitespace inside tokens is normalized away.
impl fmt::Display for TemplateIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal { text, .. } => f.write_str(text)?,
                Segment::Interpolation(interp) => write!(f, "{interp}")?,
            }
        }
        Ok(())
    }
}
