//! Quoted literal block

use crate::error::{WeftError, WeftResult};
use crate::tokenizer::is_quote;

/// A literal value inside a code span, e.g. `"abc"` or `'abc'`
///
/// Standalone value tokens must be wrapped in matching quotes. Named
/// arguments additionally accept a bare, unquoted value (`count=2`), which
/// is represented with `quote: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBlock {
    /// Raw token text, quotes included when present
    pub content: String,
    /// The text this block renders to, quotes stripped
    pub value: String,
    /// Quote character used, or `None` for a bare named-argument value
    pub quote: Option<char>,
}

impl ValueBlock {
    /// Parse a quote-delimited token into a value block.
    ///
    /// The token must be at least two characters long and start and end
    /// with the same quote character.
    pub fn parse(token: &str) -> WeftResult<Self> {
        let mut chars = token.chars();
        let first = chars.next();
        let last = chars.next_back();
        match (first, last) {
            (Some(open), Some(close)) if open == close && is_quote(open) => Ok(Self {
                content: token.to_string(),
                value: token[open.len_utf8()..token.len() - close.len_utf8()].to_string(),
                quote: Some(open),
            }),
            _ => Err(WeftError::syntax(format!(
                "value '{token}' must be wrapped in matching quotes"
            ))),
        }
    }

    /// Build a bare (unquoted) value, used for named-argument values like
    /// the `2` in `count=2`
    pub fn bare(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            content: text.clone(),
            value: text,
            quote: None,
        }
    }
}
