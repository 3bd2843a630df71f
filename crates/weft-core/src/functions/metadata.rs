//! Function parameter metadata

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conversion::ValueType;

/// Declared metadata for one function parameter
///
/// The binder consumes this: parameter order decides which parameter a
/// positional argument binds to, and `value_type` decides how argument
/// text is converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// Parameter name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Declared value type
    pub value_type: ValueType,
    /// Whether the parameter must be supplied
    pub required: bool,
    /// Default value used when the parameter is absent
    pub default_value: Option<Value>,
}

impl ParameterMetadata {
    /// Create a required parameter of the given type
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value_type,
            required: true,
            default_value: None,
        }
    }

    /// Create a required string parameter
    pub fn string<S: Into<String>>(name: S, description: S) -> Self {
        Self::new(name, description, ValueType::String)
    }

    /// Create a required integer parameter
    pub fn integer<S: Into<String>>(name: S, description: S) -> Self {
        Self::new(name, description, ValueType::Integer)
    }

    /// Create a required number parameter
    pub fn number<S: Into<String>>(name: S, description: S) -> Self {
        Self::new(name, description, ValueType::Number)
    }

    /// Create a required boolean parameter
    pub fn boolean<S: Into<String>>(name: S, description: S) -> Self {
        Self::new(name, description, ValueType::Boolean)
    }

    /// Make the parameter optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set a default value
    pub fn with_default<V: Into<Value>>(mut self, default: V) -> Self {
        self.default_value = Some(default.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_set_type() {
        let param = ParameterMetadata::string("input", "the input text");
        assert_eq!(param.value_type, ValueType::String);
        assert!(param.required);
        assert_eq!(param.default_value, None);

        let param = ParameterMetadata::integer("count", "how many");
        assert_eq!(param.value_type, ValueType::Integer);
    }

    #[test]
    fn test_optional_with_default() {
        let param = ParameterMetadata::string("style", "writing style")
            .optional()
            .with_default("neutral");
        assert!(!param.required);
        assert_eq!(param.default_value, Some(json!("neutral")));
    }
}
