//! Parsed template blocks
//!
//! A template parses into an ordered sequence of blocks. Top level, only
//! text and code blocks appear; inside a code block, the sub-blocks are
//! values, variables, function identifiers, and named arguments. Blocks
//! are immutable once constructed and carry the raw source text they were
//! parsed from, so errors and logs can quote the offending fragment.

mod code;
mod function_id;
mod named_arg;
mod text;
mod value;
mod variable;

pub use code::CodeBlock;
pub use function_id::FunctionIdBlock;
pub use named_arg::{NamedArgBlock, NamedArgValue};
pub use text::TextBlock;
pub use value::ValueBlock;
pub use variable::VariableBlock;

use std::fmt;

use crate::error::{WeftError, WeftResult};
use crate::tokenizer::{is_quote, NAMED_ARG_SEPARATOR, VAR_SIGIL};

/// Tag identifying a block's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Value,
    Variable,
    FunctionId,
    NamedArg,
    Code,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Text => "text block",
            BlockKind::Value => "value",
            BlockKind::Variable => "variable",
            BlockKind::FunctionId => "function identifier",
            BlockKind::NamedArg => "named argument",
            BlockKind::Code => "code block",
        };
        write!(f, "{name}")
    }
}

/// A node of the parsed template tree
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextBlock),
    Value(ValueBlock),
    Variable(VariableBlock),
    FunctionId(FunctionIdBlock),
    NamedArg(NamedArgBlock),
    Code(CodeBlock),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Text(_) => BlockKind::Text,
            Block::Value(_) => BlockKind::Value,
            Block::Variable(_) => BlockKind::Variable,
            Block::FunctionId(_) => BlockKind::FunctionId,
            Block::NamedArg(_) => BlockKind::NamedArg,
            Block::Code(_) => BlockKind::Code,
        }
    }

    /// Raw source text this block was parsed from
    pub fn content(&self) -> &str {
        match self {
            Block::Text(b) => &b.content,
            Block::Value(b) => &b.content,
            Block::Variable(b) => &b.content,
            Block::FunctionId(b) => &b.content,
            Block::NamedArg(b) => &b.content,
            Block::Code(b) => &b.content,
        }
    }
}

/// True for a non-empty run of letters, digits, and underscores
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classify one code-span token into its block form.
///
/// Rules applied in order: a token starting with the variable sigil and
/// containing no `=` is a variable; a token starting with a quote is a
/// value; a token containing `=` is a named argument; anything else is a
/// function identifier, legal only at token index 0.
pub(crate) fn classify_token(token: &str, index: usize) -> WeftResult<Block> {
    if token.starts_with(VAR_SIGIL) && !token.contains(NAMED_ARG_SEPARATOR) {
        return Ok(Block::Variable(VariableBlock::parse(token)?));
    }
    if token.starts_with(is_quote) {
        return Ok(Block::Value(ValueBlock::parse(token)?));
    }
    if token.contains(NAMED_ARG_SEPARATOR) {
        return Ok(Block::NamedArg(NamedArgBlock::parse(token)?));
    }
    if index == 0 {
        return Ok(Block::FunctionId(FunctionIdBlock::parse(token)?));
    }
    Err(WeftError::syntax(format!(
        "unexpected token '{token}' at position {index}: only named arguments may follow \
         the first argument"
    )))
}
