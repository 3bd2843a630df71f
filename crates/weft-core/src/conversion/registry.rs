//! Converter registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{WeftError, WeftResult};

use super::builtin::{
    display_value, ArrayConverter, BooleanConverter, IntegerConverter, NullConverter,
    NumberConverter, ObjectConverter, StringConverter,
};
use super::{ValueConverter, ValueType};

/// Maps value types to their converters
///
/// Concurrent reads and registrations are both safe; callers may extend
/// a shared registry at any time. A registry can be layered over a
/// parent, in which case its own entries shadow the parent's for the
/// same type; this is how per-render converter overrides compose without
/// touching shared state.
pub struct ConverterRegistry {
    converters: RwLock<HashMap<ValueType, Arc<dyn ValueConverter>>>,
    parent: Option<Arc<ConverterRegistry>>,
}

impl ConverterRegistry {
    /// Registry with no converters and no parent
    pub fn empty() -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
            parent: None,
        }
    }

    /// Registry with the built-in converter for every value type
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        registry.register(Arc::new(StringConverter));
        registry.register(Arc::new(IntegerConverter));
        registry.register(Arc::new(NumberConverter));
        registry.register(Arc::new(BooleanConverter));
        registry.register(Arc::new(ArrayConverter));
        registry.register(Arc::new(ObjectConverter));
        registry.register(Arc::new(NullConverter));
        registry
    }

    /// Empty registry whose lookups fall back to `parent`
    pub fn layered(parent: Arc<ConverterRegistry>) -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
            parent: Some(parent),
        }
    }

    /// Register a converter under its own [`ValueType`], replacing any
    /// existing entry for that type
    pub fn register(&self, converter: Arc<dyn ValueConverter>) {
        self.converters
            .write()
            .insert(converter.value_type(), converter);
    }

    /// Find the converter for a type, consulting the parent when this
    /// layer has no entry
    pub fn lookup(&self, value_type: ValueType) -> Option<Arc<dyn ValueConverter>> {
        if let Some(converter) = self.converters.read().get(&value_type) {
            return Some(Arc::clone(converter));
        }
        self.parent.as_ref()?.lookup(value_type)
    }

    /// Prompt-string form of a value via its type's converter.
    ///
    /// Total: values whose type has no registered converter render
    /// through a generic fallback rather than failing.
    pub fn to_prompt_string(&self, value: &Value) -> String {
        match self.lookup(ValueType::of(value)) {
            Some(converter) => converter.to_prompt_string(value),
            None => display_value(value),
        }
    }

    /// Parse prompt text into a value of the target type
    pub fn from_prompt_string(&self, target: ValueType, text: &str) -> WeftResult<Value> {
        self.require(target)?.from_prompt_string(text)
    }

    /// Narrow a runtime value to the target type
    pub fn from_object(&self, target: ValueType, value: &Value) -> WeftResult<Value> {
        self.require(target)?.from_object(value)
    }

    fn require(&self, target: ValueType) -> WeftResult<Arc<dyn ValueConverter>> {
        self.lookup(target).ok_or_else(|| {
            WeftError::type_conversion(target.name(), "no converter registered for this type")
        })
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self
            .converters
            .read()
            .keys()
            .map(ValueType::name)
            .collect();
        types.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("converters", &types)
            .field("layered", &self.parent.is_some())
            .finish()
    }
}
