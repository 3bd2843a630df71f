//! Function identifier block

use std::fmt;

use crate::error::{WeftError, WeftResult};
use crate::tokenizer::PLUGIN_SEPARATOR;

use super::is_identifier;

/// A reference to a callable function, e.g. `time.date` or `greet`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionIdBlock {
    /// Raw token text
    pub content: String,
    /// Plugin (namespace) part, when the token contains a `.`
    pub plugin_name: Option<String>,
    /// Function part, always present
    pub function_name: String,
}

impl FunctionIdBlock {
    /// Parse a `function` or `plugin.function` token.
    ///
    /// Both parts must be non-empty identifier runs; at most one `.` is
    /// allowed.
    pub fn parse(token: &str) -> WeftResult<Self> {
        let mut parts = token.split(PLUGIN_SEPARATOR);
        let (plugin_name, function_name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(function), None, _) => (None, function),
            (Some(plugin), Some(function), None) => (Some(plugin), function),
            _ => {
                return Err(WeftError::syntax(format!(
                    "function identifier '{token}' can contain at most one '{PLUGIN_SEPARATOR}'"
                )));
            }
        };
        if !is_identifier(function_name) || !plugin_name.is_none_or(is_identifier) {
            return Err(WeftError::syntax(format!(
                "function identifier '{token}' must be 'function' or 'plugin.function' \
                 with non-empty names of letters, digits, and underscores"
            )));
        }
        Ok(Self {
            content: token.to_string(),
            plugin_name: plugin_name.map(String::from),
            function_name: function_name.to_string(),
        })
    }

    /// The `plugin.function` form, or just the function name when no
    /// plugin part is present
    pub fn qualified_name(&self) -> String {
        match &self.plugin_name {
            Some(plugin) => format!("{}{}{}", plugin, PLUGIN_SEPARATOR, self.function_name),
            None => self.function_name.clone(),
        }
    }
}

impl fmt::Display for FunctionIdBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
