//! Time and date prompt functions

use std::fmt::Write as _;

use async_trait::async_trait;
use serde_json::Value;
use weft_core::arguments::TemplateArguments;
use weft_core::context::InvocationContext;
use weft_core::error::{WeftError, WeftResult};
use weft_core::functions::{ParameterMetadata, PromptFunction};

use crate::optional_str;

const DEFAULT_NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Function returning the current UTC date
pub struct DateFunction;

impl DateFunction {
    /// Create a new date function
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for DateFunction {
    fn name(&self) -> &str {
        "date"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("time")
    }

    fn description(&self) -> &str {
        "Returns the current UTC date formatted as YYYY-MM-DD"
    }

    async fn invoke(
        &self,
        _arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        Ok(Value::String(
            chrono::Utc::now().format("%Y-%m-%d").to_string(),
        ))
    }
}

/// Function returning the current UTC timestamp
///
/// Accepts an optional `format` argument holding a strftime format
/// string, e.g. `{{time.now format='%H:%M'}}`.
pub struct NowFunction;

impl NowFunction {
    /// Create a new timestamp function
    pub fn new() -> Self {
        Self
    }
}

impl Default for NowFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptFunction for NowFunction {
    fn name(&self) -> &str {
        "now"
    }

    fn plugin_name(&self) -> Option<&str> {
        Some("time")
    }

    fn description(&self) -> &str {
        "Returns the current UTC timestamp, optionally using a custom strftime format"
    }

    fn parameters(&self) -> Vec<ParameterMetadata> {
        vec![
            ParameterMetadata::string("format", "strftime format string for the timestamp")
                .optional()
                .with_default(DEFAULT_NOW_FORMAT),
        ]
    }

    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        _context: &InvocationContext,
    ) -> WeftResult<Value> {
        let format = optional_str(arguments, "format").unwrap_or(DEFAULT_NOW_FORMAT);
        // An invalid strftime specifier surfaces as a fmt error while the
        // delayed format renders, not when it is constructed.
        let mut rendered = String::new();
        write!(rendered, "{}", chrono::Utc::now().format(format))
            .map_err(|_| WeftError::invalid_input(format!("invalid time format '{format}'")))?;
        Ok(Value::String(rendered))
    }
}
