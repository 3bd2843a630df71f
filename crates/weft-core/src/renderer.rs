//! Template renderer
//!
//! Walks a validated template in document order, concatenating rendered
//! blocks. Function calls are awaited one at a time: later blocks may
//! depend on side effects of earlier invocations, so sibling blocks are
//! never evaluated in parallel.

use std::sync::Arc;

use tracing::debug;

use crate::arguments::TemplateArguments;
use crate::binder::{bind_arguments, variable_prompt_string};
use crate::blocks::{Block, CodeBlock};
use crate::cache::TemplateCache;
use crate::context::InvocationContext;
use crate::conversion::{ConverterRegistry, ValueConverter};
use crate::error::{WeftError, WeftResult};
use crate::escape::escape_prompt_text;
use crate::functions::FunctionRegistry;
use crate::options::RenderOptions;
use crate::template::PromptTemplate;

/// Renders prompt templates against a function registry
///
/// The renderer owns a converter registry (shared, extendable at any
/// time) and an optional parse cache. It holds no per-render state; one
/// renderer serves concurrent render calls.
pub struct PromptRenderer {
    functions: Arc<dyn FunctionRegistry>,
    converters: Arc<ConverterRegistry>,
    options: RenderOptions,
    cache: Option<TemplateCache>,
}

impl PromptRenderer {
    /// Renderer with default converters and options
    pub fn new(functions: Arc<dyn FunctionRegistry>) -> Self {
        let options = RenderOptions::default();
        let cache = Self::build_cache(&options);
        Self {
            functions,
            converters: Arc::new(ConverterRegistry::with_defaults()),
            options,
            cache,
        }
    }

    /// Replace the converter registry
    pub fn with_converters(mut self, converters: Arc<ConverterRegistry>) -> Self {
        self.converters = converters;
        self
    }

    /// Replace the render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.cache = Self::build_cache(&options);
        self.options = options;
        self
    }

    /// The shared converter registry; register here to affect every
    /// subsequent render
    pub fn converters(&self) -> &Arc<ConverterRegistry> {
        &self.converters
    }

    fn build_cache(options: &RenderOptions) -> Option<TemplateCache> {
        (options.template_cache_capacity > 0)
            .then(|| TemplateCache::new(options.template_cache_capacity))
    }

    /// Render raw template text.
    ///
    /// Parses (or retrieves the cached parse of) the text, then renders
    /// it with the caller's arguments and invocation context.
    pub async fn render(
        &self,
        template_text: &str,
        arguments: &TemplateArguments,
        context: &InvocationContext,
    ) -> WeftResult<String> {
        let template = self.parse(template_text)?;
        self.render_template(&template, arguments, context).await
    }

    /// Render raw template text with per-render converter overrides.
    ///
    /// The overrides shadow the renderer's converters for their types in
    /// this render only; the shared registry is untouched.
    pub async fn render_with_converters(
        &self,
        template_text: &str,
        arguments: &TemplateArguments,
        context: &InvocationContext,
        overrides: Vec<Arc<dyn ValueConverter>>,
    ) -> WeftResult<String> {
        let layered = ConverterRegistry::layered(Arc::clone(&self.converters));
        for converter in overrides {
            layered.register(converter);
        }
        let template = self.parse(template_text)?;
        self.render_blocks(&template, arguments, context, &layered)
            .await
    }

    /// Render an already parsed template
    pub async fn render_template(
        &self,
        template: &PromptTemplate,
        arguments: &TemplateArguments,
        context: &InvocationContext,
    ) -> WeftResult<String> {
        self.render_blocks(template, arguments, context, &self.converters)
            .await
    }

    fn parse(&self, template_text: &str) -> WeftResult<Arc<PromptTemplate>> {
        match &self.cache {
            Some(cache) => cache.get_or_parse(template_text),
            None => Ok(Arc::new(PromptTemplate::parse(template_text)?)),
        }
    }

    async fn render_blocks(
        &self,
        template: &PromptTemplate,
        arguments: &TemplateArguments,
        context: &InvocationContext,
        converters: &ConverterRegistry,
    ) -> WeftResult<String> {
        let mut output = String::new();
        for block in &template.blocks {
            match block {
                Block::Text(text) => output.push_str(&text.content),
                Block::Code(code) => {
                    let rendered = self
                        .render_code_block(code, arguments, context, converters)
                        .await?;
                    output.push_str(&rendered);
                }
                other => {
                    return Err(WeftError::internal(format!(
                        "{} at template top level",
                        other.kind()
                    )));
                }
            }
        }
        Ok(output)
    }

    async fn render_code_block(
        &self,
        code: &CodeBlock,
        arguments: &TemplateArguments,
        context: &InvocationContext,
        converters: &ConverterRegistry,
    ) -> WeftResult<String> {
        match &code.blocks[..] {
            [Block::Value(value)] => Ok(value.value.clone()),
            [Block::Variable(variable)] => {
                Ok(variable_prompt_string(variable, arguments, converters))
            }
            [Block::FunctionId(_), ..] => {
                self.render_function_call(code, arguments, context, converters)
                    .await
            }
            _ => Err(WeftError::internal(format!(
                "code block '{}' has no renderable shape",
                code.content
            ))),
        }
    }

    async fn render_function_call(
        &self,
        code: &CodeBlock,
        arguments: &TemplateArguments,
        context: &InvocationContext,
        converters: &ConverterRegistry,
    ) -> WeftResult<String> {
        let Some(id) = code.function_id() else {
            return Err(WeftError::internal(format!(
                "code block '{}' is not a function call",
                code.content
            )));
        };
        let function = self
            .functions
            .resolve(id.plugin_name.as_deref(), &id.function_name)
            .ok_or_else(|| WeftError::function_not_found(id.qualified_name()))?;

        let enriched = bind_arguments(code, function.as_ref(), arguments, converters)?;

        debug!(function = %id.qualified_name(), "invoking template function");
        let result = function.invoke(&enriched, context).await.map_err(|err| {
            WeftError::invocation(id.qualified_name(), code.content.clone(), err.to_string())
        })?;

        let text = match converters.lookup(function.result_type()) {
            Some(converter) => converter.to_prompt_string(&result),
            None => converters.to_prompt_string(&result),
        };
        if self.options.escape_function_output {
            Ok(escape_prompt_text(&text))
        } else {
            Ok(text)
        }
    }
}

impl std::fmt::Debug for PromptRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRenderer")
            .field("converters", &self.converters)
            .field("options", &self.options)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
