//! Invocation context

use std::collections::HashMap;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Ambient context passed through to every function invocation in a
/// render
///
/// The renderer treats this as opaque: it carries execution settings and
/// a cancellation signal for the invoked functions, which a function may
/// consult or ignore. Cancellation is cooperative; when a function fails
/// because the token tripped, the render fails with that function's
/// error.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// Execution settings for invoked functions, e.g. model parameters
    pub settings: HashMap<String, Value>,
    /// Correlation data: session ids, trace ids, caller tags
    pub metadata: HashMap<String, String>,
    /// Cooperative cancellation signal
    pub cancellation: CancellationToken,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an execution setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}
