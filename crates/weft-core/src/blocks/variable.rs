//! Variable reference block

use std::fmt;

use crate::error::{WeftError, WeftResult};
use crate::tokenizer::VAR_SIGIL;

use super::is_identifier;

/// A reference to a named variable, e.g. `$input`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBlock {
    /// Raw token text, sigil included
    pub content: String,
    /// Variable name without the `$` sigil
    pub name: String,
}

impl VariableBlock {
    /// Parse a `$name` token into a variable block.
    ///
    /// The name must be a non-empty run of letters, digits, and
    /// underscores.
    pub fn parse(token: &str) -> WeftResult<Self> {
        let name = token.strip_prefix(VAR_SIGIL).ok_or_else(|| {
            WeftError::syntax(format!("variable '{token}' must start with '{VAR_SIGIL}'"))
        })?;
        if !is_identifier(name) {
            return Err(WeftError::syntax(format!(
                "variable name '{name}' must be a non-empty run of letters, digits, and underscores"
            )));
        }
        Ok(Self {
            content: token.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for VariableBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", VAR_SIGIL, self.name)
    }
}
