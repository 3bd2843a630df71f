//! Code span tokenizer
//!
//! Splits the inside of one `{{ ... }}` span into whitespace-delimited
//! tokens. Quoted literals keep their surrounding quotes (classification
//! needs them) and may contain whitespace; backslash escapes inside a
//! literal are resolved here.

use crate::error::{WeftError, WeftResult};

use super::{is_quote, ESCAPE_CHAR};

/// Splits one code span into raw tokens
pub struct CodeTokenizer;

impl CodeTokenizer {
    /// Tokenize the content of a code span.
    ///
    /// Whitespace separates tokens except inside a quoted literal. Inside
    /// a literal, `\\`, `\'`, and `\"` resolve to the escaped character;
    /// any other backslash is kept as-is. Fails when a quote never closes.
    pub fn tokenize(content: &str) -> WeftResult<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let chars: Vec<char> = content.chars().collect();
        let mut pos = 0;
        let mut quote: Option<char> = None;

        while pos < chars.len() {
            let c = chars[pos];
            match quote {
                Some(q) => {
                    if c == ESCAPE_CHAR
                        && pos + 1 < chars.len()
                        && Self::is_escapable(chars[pos + 1])
                    {
                        current.push(chars[pos + 1]);
                        pos += 2;
                        continue;
                    }
                    if c == q {
                        quote = None;
                    }
                    current.push(c);
                }
                None => {
                    if c.is_whitespace() {
                        if !current.is_empty() {
                            tokens.push(std::mem::take(&mut current));
                        }
                    } else {
                        if is_quote(c) {
                            quote = Some(c);
                        }
                        current.push(c);
                    }
                }
            }
            pos += 1;
        }

        if let Some(q) = quote {
            return Err(WeftError::syntax(format!(
                "unterminated quoted value in '{content}': missing closing {q}"
            )));
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        Ok(tokens)
    }

    fn is_escapable(c: char) -> bool {
        is_quote(c) || c == ESCAPE_CHAR
    }
}
