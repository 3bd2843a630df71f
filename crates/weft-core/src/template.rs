//! Parsed prompt template
//!
//! [`PromptTemplate::parse`] turns raw template text into a validated
//! block sequence. Parsing is pure and touches no function registry, so
//! a parsed template can be cached and shared across renders.

use crate::blocks::{classify_token, Block, CodeBlock, TextBlock};
use crate::error::WeftResult;
use crate::tokenizer::{CodeTokenizer, SpanKind, TemplateTokenizer};

/// The top-level parse result: an ordered sequence of text and code blocks
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    /// Raw template text this was parsed from
    pub text: String,
    /// Top-level blocks in document order; only text and code blocks
    /// appear here
    pub blocks: Vec<Block>,
}

impl PromptTemplate {
    /// Parse raw template text into a validated template.
    ///
    /// All syntax errors surface here: unterminated code spans, malformed
    /// quoting, invalid identifiers, and structural violations inside a
    /// code block. What parses here renders without further syntax
    /// checking.
    pub fn parse(text: &str) -> WeftResult<Self> {
        let spans = TemplateTokenizer::tokenize(text)?;
        let mut blocks = Vec::with_capacity(spans.len());

        for span in spans {
            match span.kind {
                SpanKind::Text => blocks.push(Block::Text(TextBlock::new(span.content))),
                SpanKind::Code => {
                    let tokens = CodeTokenizer::tokenize(&span.content)?;
                    let mut sub_blocks = Vec::with_capacity(tokens.len());
                    for (index, token) in tokens.iter().enumerate() {
                        sub_blocks.push(classify_token(token, index)?);
                    }
                    blocks.push(Block::Code(CodeBlock::new(span.content.trim(), sub_blocks)?));
                }
            }
        }

        Ok(Self {
            text: text.to_string(),
            blocks,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;

    #[test]
    fn test_parse_plain_text() {
        let template = PromptTemplate::parse("no code here").unwrap();
        assert_eq!(template.blocks.len(), 1);
        assert_eq!(template.blocks[0].kind(), BlockKind::Text);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(PromptTemplate::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_template() {
        let template = PromptTemplate::parse("Today is {{time.date}}. {{greet $name}}").unwrap();
        let kinds: Vec<_> = template.blocks.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Text,
                BlockKind::Code,
                BlockKind::Text,
                BlockKind::Code,
            ]
        );

        let Block::Code(call) = &template.blocks[3] else {
            panic!("expected code block");
        };
        assert_eq!(call.content, "greet $name");
        assert_eq!(call.function_id().unwrap().function_name, "greet");
        assert_eq!(call.args().len(), 1);
    }

    #[test]
    fn test_parse_sole_value_block() {
        let template = PromptTemplate::parse("{{ \"abc\" }}").unwrap();
        let Block::Code(code) = &template.blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.blocks.len(), 1);
        assert_eq!(code.blocks[0].kind(), BlockKind::Value);
    }

    #[test]
    fn test_parse_sole_variable_block() {
        let template = PromptTemplate::parse("{{$input}}").unwrap();
        let Block::Code(code) = &template.blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.blocks[0].kind(), BlockKind::Variable);
    }

    #[test]
    fn test_parse_function_call_with_named_args() {
        let template =
            PromptTemplate::parse("{{writer.rewrite $draft style=\"concise\" keep=$notes}}")
                .unwrap();
        let Block::Code(code) = &template.blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.function_id().unwrap().qualified_name(), "writer.rewrite");
        assert_eq!(code.args().len(), 3);
        assert_eq!(code.args()[1].kind(), BlockKind::NamedArg);
        assert_eq!(code.args()[2].kind(), BlockKind::NamedArg);
    }

    #[test]
    fn test_parse_empty_code_block_is_error() {
        assert!(PromptTemplate::parse("{{}}").is_err());
        assert!(PromptTemplate::parse("{{   }}").is_err());
    }

    #[test]
    fn test_parse_unterminated_span_is_error() {
        let err = PromptTemplate::parse("hello {{ incomplete").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_parse_mismatched_quotes_is_error() {
        let err = PromptTemplate::parse("{{ 'abc\" }}").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_parse_second_positional_argument_is_error() {
        assert!(PromptTemplate::parse("{{fn $a 'b'}}").is_err());
    }

    #[test]
    fn test_parse_does_not_consult_any_registry() {
        // unknown functions parse fine; resolution is a render concern
        let template = PromptTemplate::parse("{{no.such_function $x}}").unwrap();
        assert_eq!(template.blocks.len(), 1);
    }
}
