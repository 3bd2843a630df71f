//! Error types for the weft template engine

use thiserror::Error;

/// Result type alias for template engine operations
pub type WeftResult<T> = Result<T, WeftError>;

/// Main error type for the weft template engine
///
/// Syntax errors are produced while tokenizing and validating a template,
/// before any function is invoked. The remaining variants can only occur at
/// render time, once function registry metadata is available.
#[derive(Error, Debug, Clone)]
pub enum WeftError {
    /// Malformed template text: unterminated code block, invalid block
    /// ordering, malformed quoting, or an invalid identifier
    #[error("Template syntax error: {message}")]
    Syntax {
        message: String,
        /// Character offset into the raw template, when known
        position: Option<usize>,
    },

    /// A code block references a plugin/function the registry cannot resolve
    #[error("Function '{function}' not found")]
    FunctionNotFound { function: String },

    /// Structural argument mismatch discovered with registry knowledge:
    /// a zero-parameter function given arguments, an ambiguous
    /// positional/named collision, or a non-named token in a named-only
    /// position
    #[error("Unexpected argument for function '{function}': {message}")]
    UnexpectedArgument { function: String, message: String },

    /// A value could not be coerced to a declared parameter type, or a
    /// function result could not be converted to its prompt-string form
    #[error("Cannot convert value to '{target}': {message}")]
    TypeConversion { target: String, message: String },

    /// The invoked function itself failed; carries the function name and the
    /// content of the offending code block for diagnosis
    #[error("Function '{function}' failed while rendering '{{{{{block}}}}}': {message}")]
    FunctionInvocation {
        function: String,
        block: String,
        message: String,
    },

    /// Invalid input supplied to a prompt function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant violation; indicates a bug, not a user error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WeftError {
    /// Create a syntax error without position information
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            position: None,
        }
    }

    /// Create a syntax error at a character offset in the raw template
    pub fn syntax_at(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            position: Some(position),
        }
    }

    /// Create a function-not-found error for a qualified function name
    pub fn function_not_found(function: impl Into<String>) -> Self {
        Self::FunctionNotFound {
            function: function.into(),
        }
    }

    /// Create an unexpected-argument error
    pub fn unexpected_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedArgument {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create a type-conversion error
    pub fn type_conversion(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeConversion {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Wrap an error surfaced by an invoked function
    pub fn invocation(
        function: impl Into<String>,
        block: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FunctionInvocation {
            function: function.into(),
            block: block.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an internal invariant-violation error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for errors detectable at authoring time, before any render
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}
