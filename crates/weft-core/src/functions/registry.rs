//! Function registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::PromptFunction;

/// Resolves a template's function reference to an invocable function
///
/// The renderer only ever resolves; registration and lifecycle belong to
/// the embedding application. Lookups are case-insensitive in both the
/// plugin and function parts.
pub trait FunctionRegistry: Send + Sync {
    /// Resolve a reference, `None` when no such function is registered
    fn resolve(
        &self,
        plugin_name: Option<&str>,
        function_name: &str,
    ) -> Option<Arc<dyn PromptFunction>>;
}

fn registry_key(plugin_name: Option<&str>, function_name: &str) -> String {
    match plugin_name {
        Some(plugin) => format!("{}.{}", plugin, function_name).to_lowercase(),
        None => function_name.to_lowercase(),
    }
}

/// Simple [`FunctionRegistry`] backed by a map from qualified name to
/// function
pub struct InMemoryFunctionRegistry {
    functions: HashMap<String, Arc<dyn PromptFunction>>,
}

impl InMemoryFunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function under its qualified name, replacing any
    /// previous registration
    pub fn register(&mut self, function: Arc<dyn PromptFunction>) {
        let key = registry_key(function.plugin_name(), function.name());
        self.functions.insert(key, function);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_function(mut self, function: Arc<dyn PromptFunction>) -> Self {
        self.register(function);
        self
    }

    pub fn has_function(&self, plugin_name: Option<&str>, function_name: &str) -> bool {
        self.functions
            .contains_key(&registry_key(plugin_name, function_name))
    }

    /// Qualified names of all registered functions
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .functions
            .values()
            .map(|f| f.qualified_name())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for InMemoryFunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry for InMemoryFunctionRegistry {
    fn resolve(
        &self,
        plugin_name: Option<&str>,
        function_name: &str,
    ) -> Option<Arc<dyn PromptFunction>> {
        self.functions
            .get(&registry_key(plugin_name, function_name))
            .cloned()
    }
}

impl fmt::Debug for InMemoryFunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryFunctionRegistry")
            .field("functions", &self.function_names())
            .finish()
    }
}
