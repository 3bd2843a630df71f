//! Function boundary
//!
//! The renderer never executes anything itself; it resolves a
//! `plugin.function` reference through a [`FunctionRegistry`] and
//! invokes the returned [`PromptFunction`]. Both are traits so the
//! embedding application decides what functions exist and what their
//! invocation actually does.

mod function;
mod metadata;
mod registry;

pub use function::PromptFunction;
pub use metadata::ParameterMetadata;
pub use registry::{FunctionRegistry, InMemoryFunctionRegistry};
