//! Top-level template tokenizer
//!
//! Splits raw template text into TEXT and CODE spans. A code span starts
//! at `{{` and ends at the next `}}` that is not inside a quoted literal.

use crate::error::{WeftError, WeftResult};

use super::{is_quote, BLOCK_ENDER, BLOCK_STARTER, ESCAPE_CHAR};

/// Kind of a top-level span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Literal text, rendered verbatim
    Text,
    /// The inside of a `{{ ... }}` pair, delimiters excluded
    Code,
}

/// One top-level span of the template
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub kind: SpanKind,
    pub content: String,
    /// Character offset of the span start in the raw template
    pub offset: usize,
}

/// Splits raw template text into text and code spans
pub struct TemplateTokenizer;

impl TemplateTokenizer {
    /// Tokenize raw template text.
    ///
    /// Fails when a `{{` has no matching `}}`, including the case where a
    /// quoted literal inside the span never closes and swallows the rest
    /// of the template.
    pub fn tokenize(text: &str) -> WeftResult<Vec<Span>> {
        let mut spans = Vec::new();
        let chars: Vec<char> = text.chars().collect();
        let mut pos = 0;
        let mut text_start = 0;

        while pos < chars.len() {
            if pos + 1 < chars.len()
                && chars[pos] == BLOCK_STARTER
                && chars[pos + 1] == BLOCK_STARTER
            {
                if pos > text_start {
                    spans.push(Span {
                        kind: SpanKind::Text,
                        content: chars[text_start..pos].iter().collect(),
                        offset: text_start,
                    });
                }

                let code_start = pos + 2;
                let Some(code_end) = Self::find_code_end(&chars, code_start) else {
                    return Err(WeftError::syntax_at("unterminated code block", pos));
                };
                spans.push(Span {
                    kind: SpanKind::Code,
                    content: chars[code_start..code_end].iter().collect(),
                    offset: pos,
                });
                pos = code_end + 2;
                text_start = pos;
            } else {
                pos += 1;
            }
        }

        if text_start < chars.len() {
            spans.push(Span {
                kind: SpanKind::Text,
                content: chars[text_start..].iter().collect(),
                offset: text_start,
            });
        }

        Ok(spans)
    }

    /// Find the `}}` closing a code span, skipping any `}}` inside a
    /// quoted literal. Returns the position of its first `}`.
    fn find_code_end(chars: &[char], start: usize) -> Option<usize> {
        let mut pos = start;
        let mut quote: Option<char> = None;

        while pos < chars.len() {
            let c = chars[pos];
            match quote {
                Some(q) => {
                    if c == ESCAPE_CHAR && pos + 1 < chars.len() {
                        pos += 2;
                        continue;
                    }
                    if c == q {
                        quote = None;
                    }
                }
                None => {
                    if is_quote(c) {
                        quote = Some(c);
                    } else if c == BLOCK_ENDER
                        && pos + 1 < chars.len()
                        && chars[pos + 1] == BLOCK_ENDER
                    {
                        return Some(pos);
                    }
                }
            }
            pos += 1;
        }

        None
    }
}
