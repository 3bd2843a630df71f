//! Weft Core Library
//!
//! Prompt templating engine for LLM applications: a small template
//! language mixing literal text with variable interpolation and embedded
//! function calls. Raw text parses into a validated block tree, and an
//! async renderer evaluates that tree against caller-supplied arguments
//! and a registry of invocable functions.
//!
//! ```
//! use std::sync::Arc;
//! use weft_core::{
//!     InMemoryFunctionRegistry, InvocationContext, PromptRenderer, TemplateArguments,
//! };
//!
//! # async fn example() -> weft_core::WeftResult<()> {
//! let registry = InMemoryFunctionRegistry::new();
//! let renderer = PromptRenderer::new(Arc::new(registry));
//! let arguments = TemplateArguments::new().with("name", "Ada");
//! let output = renderer
//!     .render("Hello {{$name}}!", &arguments, &InvocationContext::new())
//!     .await?;
//! assert_eq!(output, "Hello Ada!");
//! # Ok(())
//! # }
//! ```

pub mod arguments;
mod binder;
pub mod blocks;
pub mod cache;
pub mod context;
pub mod conversion;
pub mod error;
pub mod escape;
pub mod functions;
pub mod options;
pub mod renderer;
pub mod template;
pub mod tokenizer;

// Re-export commonly used types
pub use arguments::TemplateArguments;
pub use blocks::{Block, BlockKind, CodeBlock, TextBlock, ValueBlock, VariableBlock};
pub use cache::TemplateCache;
pub use context::InvocationContext;
pub use conversion::{ConverterRegistry, ValueConverter, ValueType};
pub use error::{WeftError, WeftResult};
pub use escape::escape_prompt_text;
pub use functions::{
    FunctionRegistry, InMemoryFunctionRegistry, ParameterMetadata, PromptFunction,
};
pub use options::RenderOptions;
pub use renderer::PromptRenderer;
pub use template::PromptTemplate;
