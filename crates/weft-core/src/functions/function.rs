//! Prompt function trait

use async_trait::async_trait;
use serde_json::Value;

use crate::arguments::TemplateArguments;
use crate::context::InvocationContext;
use crate::conversion::ValueType;
use crate::error::WeftResult;

use super::ParameterMetadata;

/// A function a template can call through a `{{plugin.function ...}}`
/// code block
///
/// Implementations typically wrap an LLM call, a search backend, or a
/// plain native computation. Invocation may suspend; the renderer awaits
/// each call before moving to the next block.
#[async_trait]
pub trait PromptFunction: Send + Sync {
    /// Function name, unique within its plugin
    fn name(&self) -> &str;

    /// Plugin (namespace) this function belongs to, if any
    fn plugin_name(&self) -> Option<&str> {
        None
    }

    /// Human-readable description
    fn description(&self) -> &str;

    /// Declared parameters, in positional order.
    ///
    /// The first entry is the positional parameter: the one an unnamed
    /// argument token binds to.
    fn parameters(&self) -> Vec<ParameterMetadata> {
        Vec::new()
    }

    /// Declared result type, used to pick the converter that turns the
    /// invocation result into prompt text
    fn result_type(&self) -> ValueType {
        ValueType::String
    }

    /// Invoke the function with bound arguments.
    ///
    /// Errors surface to the render caller as a function-invocation
    /// failure carrying this function's name.
    async fn invoke(
        &self,
        arguments: &TemplateArguments,
        context: &InvocationContext,
    ) -> WeftResult<Value>;

    /// The `plugin.function` form, or just the name when the function
    /// has no plugin
    fn qualified_name(&self) -> String {
        match self.plugin_name() {
            Some(plugin) => format!("{}.{}", plugin, self.name()),
            None => self.name().to_string(),
        }
    }
}
