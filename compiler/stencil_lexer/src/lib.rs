//! Stencil Lexer - splits templates into literal text and interpolations.
//!
//! Two layers:
//! - [`tokenize`] scans a whole template for `{{` / `}}` and yields
//!   [`RawSegment`]s. Quotes are not special at this level.
//! - [`lex_interpolation`] splits one interpolation body into
//!   [`InterpToken`]s (pipes, colons, commas, quoted and bare words) for the
//!   parser. Whitespace between tokens is dropped here.

mod interp;
mod tokenizer;

pub use interp::{lex_interpolation, InterpToken, InterpTokenKind};
pub use tokenizer::{tokenize, RawSegment, Tokenizer, CLOSE, OPEN};
