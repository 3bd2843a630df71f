//! Weft prompt templating for LLM applications.
//!
//! Re-exports the template engine from [`weft_core`] together with the
//! built-in function library from [`weft_functions`]. Most applications
//! depend on this crate alone:
//!
//! ```
//! use std::sync::Arc;
//! use weft::{InvocationContext, PromptRenderer, TemplateArguments};
//!
//! # async fn example() -> weft::WeftResult<()> {
//! let renderer = PromptRenderer::new(Arc::new(weft::builtins::default_registry()));
//! let arguments = TemplateArguments::new().with("name", "ada");
//! let output = renderer
//!     .render(
//!         "{{text.uppercase $name}} joined on {{time.date}}",
//!         &arguments,
//!         &InvocationContext::new(),
//!     )
//!     .await?;
//! assert!(output.starts_with("ADA joined on "));
//! # Ok(())
//! # }
//! ```

pub use weft_core::*;
pub use weft_functions as builtins;
