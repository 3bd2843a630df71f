//! Function-call argument binding
//!
//! Turns the argument sub-blocks of a function call plus the caller's
//! argument bag into the enriched bag the function is invoked with. The
//! caller's bag is never mutated; binding works on a clone, so sibling
//! code blocks in the same render observe the original arguments.

use serde_json::Value;
use tracing::debug;

use crate::arguments::TemplateArguments;
use crate::blocks::{Block, CodeBlock, NamedArgBlock, NamedArgValue, VariableBlock};
use crate::conversion::ConverterRegistry;
use crate::error::{WeftError, WeftResult};
use crate::functions::{ParameterMetadata, PromptFunction};

/// A variable's prompt-string form, empty when the variable is not set
pub(crate) fn variable_prompt_string(
    variable: &VariableBlock,
    arguments: &TemplateArguments,
    converters: &ConverterRegistry,
) -> String {
    match arguments.get(&variable.name) {
        Some(value) => converters.to_prompt_string(value),
        None => {
            debug!(variable = %variable.name, "variable not set, rendering empty");
            String::new()
        }
    }
}

/// Bind a function call's arguments into an enriched bag.
///
/// The first argument token, unless it is a named argument, binds
/// positionally to the function's first declared parameter: a typed
/// value from the bag is narrowed to the declared type when possible,
/// and the token's prompt-string form is parsed into that type
/// otherwise. Every remaining token must be a named argument; a named
/// argument whose name matches a declared parameter is converted to the
/// declared type, any other one binds as a string.
pub(crate) fn bind_arguments(
    code: &CodeBlock,
    function: &dyn PromptFunction,
    arguments: &TemplateArguments,
    converters: &ConverterRegistry,
) -> WeftResult<TemplateArguments> {
    let args = code.args();
    if args.is_empty() {
        return Ok(arguments.clone());
    }

    let parameters = function.parameters();
    if parameters.is_empty() {
        return Err(WeftError::unexpected_argument(
            function.qualified_name(),
            format!(
                "function declares no parameters but the call supplies {}",
                args.len()
            ),
        ));
    }

    let mut enriched = arguments.clone();
    let mut positional_name: Option<&str> = None;
    let mut scan_start = 0;

    if !matches!(args[0], Block::NamedArg(_)) {
        let first_param = &parameters[0];
        let value = bind_positional(&args[0], first_param, arguments, converters)?;
        enriched.set(first_param.name.clone(), value);
        positional_name = Some(first_param.name.as_str());
        scan_start = 1;
    }

    for block in &args[scan_start..] {
        let Block::NamedArg(named) = block else {
            return Err(WeftError::unexpected_argument(
                function.qualified_name(),
                format!(
                    "'{}' appears where only named arguments are allowed",
                    block.content()
                ),
            ));
        };
        if let Some(name) = positional_name {
            if named.name.eq_ignore_ascii_case(name) {
                return Err(WeftError::unexpected_argument(
                    function.qualified_name(),
                    format!(
                        "argument '{}' is already bound by the positional argument",
                        named.name
                    ),
                ));
            }
        }
        let value = resolve_named(named, &parameters, arguments, converters)?;
        enriched.set(named.name.clone(), value);
    }

    Ok(enriched)
}

/// Bind the single positional argument to the first declared parameter.
///
/// A variable token first tries a narrowing coercion of the bag value to
/// the declared type; when that yields nothing (variable absent, or the
/// value does not narrow) the token's prompt-string form is parsed
/// instead.
fn bind_positional(
    block: &Block,
    param: &ParameterMetadata,
    arguments: &TemplateArguments,
    converters: &ConverterRegistry,
) -> WeftResult<Value> {
    let text = match block {
        Block::Variable(variable) => {
            if let Some(value) = arguments.get(&variable.name) {
                if let Ok(coerced) = converters.from_object(param.value_type, value) {
                    return Ok(coerced);
                }
            }
            variable_prompt_string(variable, arguments, converters)
        }
        Block::Value(value) => value.value.clone(),
        other => {
            return Err(WeftError::internal(format!(
                "{} ('{}') cannot appear as a positional argument",
                other.kind(),
                other.content()
            )));
        }
    };
    converters.from_prompt_string(param.value_type, &text)
}

/// Resolve a named argument's value.
///
/// Literals use their unquoted text; variables render to their
/// prompt-string form. The text is then converted to the declared type
/// when the argument names a declared parameter, and stays a plain
/// string otherwise.
fn resolve_named(
    named: &NamedArgBlock,
    parameters: &[ParameterMetadata],
    arguments: &TemplateArguments,
    converters: &ConverterRegistry,
) -> WeftResult<Value> {
    let text = match &named.value {
        NamedArgValue::Value(value) => value.value.clone(),
        NamedArgValue::Variable(variable) => {
            variable_prompt_string(variable, arguments, converters)
        }
    };
    match parameters
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&named.name))
    {
        Some(param) => converters.from_prompt_string(param.value_type, &text),
        None => Ok(Value::String(text)),
    }
}
