//! Built-in prompt functions for the weft template engine
//!
//! `weft-core` defines the [`PromptFunction`] trait and resolves function
//! references through a [`FunctionRegistry`](weft_core::functions::FunctionRegistry);
//! this crate supplies ready-made implementations for common template
//! needs, grouped into a `time` and a `text` plugin.

pub mod text;
pub mod time;

pub use text::{ConcatFunction, LengthFunction, LowercaseFunction, TrimFunction, UppercaseFunction};
pub use time::{DateFunction, NowFunction};

use std::sync::Arc;

use serde_json::Value;
use weft_core::arguments::TemplateArguments;
use weft_core::error::{WeftError, WeftResult};
use weft_core::functions::{InMemoryFunctionRegistry, PromptFunction};

/// Get all built-in prompt functions
pub fn default_functions() -> Vec<Arc<dyn PromptFunction>> {
    vec![
        Arc::new(DateFunction::new()),
        Arc::new(NowFunction::new()),
        Arc::new(UppercaseFunction::new()),
        Arc::new(LowercaseFunction::new()),
        Arc::new(TrimFunction::new()),
        Arc::new(LengthFunction::new()),
        Arc::new(ConcatFunction::new()),
    ]
}

/// Build a registry preloaded with every built-in function
pub fn default_registry() -> InMemoryFunctionRegistry {
    let mut registry = InMemoryFunctionRegistry::new();
    for function in default_functions() {
        registry.register(function);
    }
    registry
}

pub(crate) fn required_str<'a>(
    arguments: &'a TemplateArguments,
    name: &str,
) -> WeftResult<&'a str> {
    match arguments.get(name) {
        Some(value) => value
            .as_str()
            .ok_or_else(|| WeftError::invalid_input(format!("'{name}' argument must be a string"))),
        None => Err(WeftError::invalid_input(format!(
            "missing '{name}' argument"
        ))),
    }
}

pub(crate) fn optional_str<'a>(arguments: &'a TemplateArguments, name: &str) -> Option<&'a str> {
    arguments.get(name).and_then(Value::as_str)
}
