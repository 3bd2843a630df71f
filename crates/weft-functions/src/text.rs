//! Text manipulation prompt functions

use async_trait::async_trait;
use serde_json::Value;
use weft_core::arguments::TemplateArguments;
use weft_core::context::InvocationContext;
use weft_core::conversion::ValueType;
use weft_core::error::WeftResult;
use weft_core::functions::{ParameterMetadata, PromptFunction};

use crate::{optional_str, required_str};

/// Function uppercasing its input
pub struct UppercaseFunction;

impl UppercaseFunction {
    /// Create a new uppercase function
    pub fn new() -> Self {
        Self
    }
}

impl Default for UppercaseFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for UppercaseFunction {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("text")
    }

    fn description(&self) -> &str {
        "Converts the input text to uppercase"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![ParameterMetadata::string("input", "text to convert")]
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let input = required_str(arguments, "input")?;
        Ok(Value::String(input.to_uppercase()))
    }
}

/// Function lowercasing its input
pub struct LowercaseFunction;

impl LowercaseFunction {
    /// Create a new lowercase function
    pub fn new() -> Self {
        Self
    }
}

impl Default for LowercaseFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for LowercaseFunction {
    fn name(&self) -> &str {
        "lowercase"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("text")
    }

    fn description(&self) -> &str {
        "Converts the input text to lowercase"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![ParameterMetadata::string("input", "text to convert")]
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let input = required_str(arguments, "input")?;
        Ok(Value::String(input.to_lowercase()))
    }
}

/// Function trimming surrounding whitespace from its input
pub struct TrimFunction;

impl TrimFunction {
    /// Create a new trim function
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrimFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for TrimFunction {
    fn name(&self) -> &str {
        "trim"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("text")
    }

    fn description(&self) -> &str {
        "Removes leading and trailing whitespace from the input text"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![ParameterMetadata::string("input", "text to trim")]
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let input = required_str(arguments, "input")?;
        Ok(Value::String(input.trim().to_string()))
    }
}

/// Function counting the characters of its input
///
/// Declares an integer result, so the rendered substitution goes through
/// the integer converter rather than plain string formatting.
pub struct LengthFunction;

impl LengthFunction {
    /// Create a new length function
    pub fn new() -> Self {
        Self
    }
}

impl Default for LengthFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for LengthFunction {
    fn name(&self) -> &str {
        "length"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("text")
    }

    fn description(&self) -> &str {
        "Returns the number of characters in the input text"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![ParameterMetadata::string("input", "text to measure")]
    }

    fn result_type(&self) -> ValueType {
        ValueType::Integer
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let input = required_str(arguments, "input")?;
        Ok(Value::from(input.chars().count() as i64))
    }
}

/// Function appending a suffix to its input
///
/// The suffix arrives through the named `with` argument, e.g.
/// `{{text.concat $greeting with='!'}}`.
pub struct ConcatFunction;

impl ConcatFunction {
    /// Create a new concat function
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConcatFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for ConcatFunction {
    fn name(&self) -> &str {
        "concat"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("text")
    }

    fn description(&self) -> &str {
        "Appends the 'with' text to the input text"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![
            ParameterMetadata::string("input", "text to append to"),
            ParameterMetadata::string("with", "text appended after the input").optional(),
        ]
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let input = required_str(arguments, "input")?;
        let suffix = optional_str(arguments, "with").unwrap_or_default();
        Ok(Value::String(format!("{input}{suffix}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_input(input: &str) -> TemplateArguments {
        TemplateArguments::new().with("input", input)
    }

    #[tokio::test]
    async fn test_uppercase() {
        let function = UppercaseFunction::new();
        let result = function
            .invoke(&args_with_input("hello Ada"), &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("HELLO ADA".to_string()));
    }

    #[tokio::test]
    async fn test_lowercase() {
        let function = LowercaseFunction::new();
        let result = function
            .invoke(&args_with_input("Hello ADA"), &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("hello ada".to_string()));
    }

    #[tokio::test]
    async fn test_trim() {
        let function = TrimFunction::new();
        let result = function
            .invoke(&args_with_input("  spaced \n"), &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("spaced".to_string()));
    }

    #[tokio::test]
    async fn test_length_counts_chars_not_bytes() {
        let function = LengthFunction::new();
        let result = function
            .invoke(&args_with_input("héllo"), &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::from(5));
        assert_eq!(function.result_type(), ValueType::Integer);
    }

    #[tokio::test]
    async fn test_concat_with_suffix() {
        let function = ConcatFunction::new();
        let args = args_with_input("Hello").with("with", ", world");
        let result = function
            .invoke(&args, &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("Hello, world".to_string()));
    }

    #[tokio::test]
    async fn test_concat_without_suffix() {
        let function = ConcatFunction::new();
        let result = function
            .invoke(&args_with_input("Hello"), &InvocationContext::new())
            .await
            .unwrap();
        assert_eq!(result, Value::String("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_missing_input_is_rejected() {
        let function = UppercaseFunction::new();
        let err = function
            .invoke(&TemplateArguments::new(), &InvocationContext::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing 'input' argument"));
    }

    #[tokio::test]
    async fn test_non_string_input_is_rejected() {
        let function = TrimFunction::new();
        let args = TemplateArguments::new().with("input", 7);
        let err = function
            .invoke(&args, &InvocationContext::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("'input' argument must be a string"));
    }
}
