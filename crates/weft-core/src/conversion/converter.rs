//! Converter trait

use serde_json::Value;

use crate::error::WeftResult;

use super::ValueType;

/// Translates between a typed value and its canonical prompt-string form
///
/// Each converter handles exactly one [`ValueType`]. `to_prompt_string`
/// is total; the two parsing directions fail with a type-conversion
/// error when the input cannot become a value of the converter's type.
pub trait ValueConverter: Send + Sync {
    /// The type this converter is registered under
    fn value_type(&self) -> ValueType;

    /// Render a value to the text substituted into prompt output
    fn to_prompt_string(&self, value: &Value) -> String;

    /// Parse prompt text into a value of this converter's type
    fn from_prompt_string(&self, text: &str) -> WeftResult<Value>;

    /// Coerce an arbitrary runtime value into this converter's type.
    ///
    /// This is an identity or narrowing coercion only. It never parses
    /// text: `from_object` on the integer converter rejects the string
    /// `"5"`, which is what lets argument binding prefer a typed value
    /// and fall back to prompt-string parsing separately.
    fn from_object(&self, value: &Value) -> WeftResult<Value>;
}
