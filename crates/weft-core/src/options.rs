//! Render options

use serde::{Deserialize, Serialize};

/// Tunable renderer behavior
///
/// All fields have defaults, so a partial configuration file or an
/// empty `{}` deserializes to the standard behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape structural characters in function results before
    /// substitution. Text and variable output is never escaped.
    pub escape_function_output: bool,
    /// Number of parsed templates the renderer keeps cached, keyed by
    /// raw template text. Zero disables the cache.
    pub template_cache_capacity: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_function_output: true,
            template_cache_capacity: 128,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute function results verbatim, without escaping.
    ///
    /// Only for templates whose output is not embedded in a structured
    /// message format; function results can then inject text that reads
    /// as markup downstream.
    pub fn without_escaping(mut self) -> Self {
        self.escape_function_output = false;
        self
    }

    pub fn with_template_cache_capacity(mut self, capacity: usize) -> Self {
        self.template_cache_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.escape_function_output);
        assert_eq!(options.template_cache_capacity, 128);
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_partial_json_overrides_one_field() {
        let options: RenderOptions =
            serde_json::from_str("{\"escape_function_output\": false}").unwrap();
        assert!(!options.escape_function_output);
        assert_eq!(options.template_cache_capacity, 128);
    }

    #[test]
    fn test_builders() {
        let options = RenderOptions::new()
            .without_escaping()
            .with_template_cache_capacity(0);
        assert!(!options.escape_function_output);
        assert_eq!(options.template_cache_capacity, 0);
    }
}
