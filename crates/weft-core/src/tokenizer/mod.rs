//! Template lexing
//!
//! Two-stage tokenizer: [`TemplateTokenizer`] splits raw template text into
//! TEXT and CODE spans, and [`CodeTokenizer`] splits one CODE span into
//! whitespace-delimited tokens while respecting quoting. Both stages are
//! pure functions over the input string; block classification happens
//! afterwards, in the `blocks` module, so syntax errors can point at the
//! offending token rather than a raw character.

mod code;
mod template;

pub use code::CodeTokenizer;
pub use template::{Span, SpanKind, TemplateTokenizer};

/// Doubled up, opens a code span
pub(crate) const BLOCK_STARTER: char = '{';
/// Doubled up, closes a code span
pub(crate) const BLOCK_ENDER: char = '}';
/// Prefix of a variable reference
pub(crate) const VAR_SIGIL: char = '$';
pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const SINGLE_QUOTE: char = '\'';
/// Escapes the next character inside a quoted literal
pub(crate) const ESCAPE_CHAR: char = '\\';
/// Separates a named argument's name from its value
pub(crate) const NAMED_ARG_SEPARATOR: char = '=';
/// Separates a plugin name from a function name
pub(crate) const PLUGIN_SEPARATOR: char = '.';

/// True for the two quote characters the template language recognizes
pub(crate) fn is_quote(c: char) -> bool {
    c == DOUBLE_QUOTE || c == SINGLE_QUOTE
}
