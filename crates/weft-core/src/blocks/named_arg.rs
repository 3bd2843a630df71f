//! Named argument block

use crate::error::{WeftError, WeftResult};
use crate::tokenizer::{is_quote, NAMED_ARG_SEPARATOR, VAR_SIGIL};

use super::{is_identifier, ValueBlock, VariableBlock};

/// The value side of a named argument: a literal or a variable reference
#[derive(Debug, Clone, PartialEq)]
pub enum NamedArgValue {
    Value(ValueBlock),
    Variable(VariableBlock),
}

/// A `name=value` argument inside a function call, e.g. `style="formal"`,
/// `input=$query`, or `count=2`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgBlock {
    /// Raw token text
    pub content: String,
    /// Argument name, left of the `=`
    pub name: String,
    /// Argument value, right of the `=`
    pub value: NamedArgValue,
}

impl NamedArgBlock {
    /// Parse a `name=value` token into a named argument block.
    ///
    /// The value side may be a quoted literal, a `$variable`, or a bare
    /// literal containing neither quotes nor a second `=`.
    pub fn parse(token: &str) -> WeftResult<Self> {
        let (name, rest) = token.split_once(NAMED_ARG_SEPARATOR).ok_or_else(|| {
            WeftError::syntax(format!(
                "named argument '{token}' must contain '{NAMED_ARG_SEPARATOR}'"
            ))
        })?;
        if !is_identifier(name) {
            return Err(WeftError::syntax(format!(
                "named argument name '{name}' must be a non-empty run of letters, digits, \
                 and underscores"
            )));
        }
        if rest.is_empty() {
            return Err(WeftError::syntax(format!(
                "named argument '{name}' has no value after '{NAMED_ARG_SEPARATOR}'"
            )));
        }

        let value = if rest.starts_with(VAR_SIGIL) {
            NamedArgValue::Variable(VariableBlock::parse(rest)?)
        } else if rest.starts_with(is_quote) {
            NamedArgValue::Value(ValueBlock::parse(rest)?)
        } else if rest.contains(NAMED_ARG_SEPARATOR) || rest.contains(is_quote) {
            return Err(WeftError::syntax(format!(
                "named argument value '{rest}' must be a quoted literal, a \
                 {VAR_SIGIL}variable, or a bare literal without quotes or \
                 '{NAMED_ARG_SEPARATOR}'"
            )));
        } else {
            NamedArgValue::Value(ValueBlock::bare(rest))
        };

        Ok(Self {
            content: token.to_string(),
            name: name.to_string(),
            value,
        })
    }
}
