//! Built-in converters for the JSON value model

use serde_json::{Number, Value};

use crate::error::{WeftError, WeftResult};

use super::{ValueConverter, ValueType};

/// Generic text form of a value: strings unwrapped, null empty,
/// containers as compact JSON
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn narrowing_error(target: ValueType, value: &Value) -> WeftError {
    WeftError::type_conversion(
        target.name(),
        format!("cannot narrow a {} value", ValueType::of(value)),
    )
}

pub struct StringConverter;

impl ValueConverter for StringConverter {
    fn value_type(&self) -> ValueType {
        ValueType::String
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        display_value(value)
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        Ok(Value::String(text.to_string()))
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(narrowing_error(ValueType::String, other)),
        }
    }
}

pub struct IntegerConverter;

impl ValueConverter for IntegerConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        match value.as_f64() {
            // prints whole floats without the trailing ".0"
            Some(f) if value.as_i64().is_none() && f.fract() == 0.0 => format!("{f:.0}"),
            _ => display_value(value),
        }
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        text.trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| {
                WeftError::type_conversion("integer", format!("cannot parse '{text}'"))
            })
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        if let Some(n) = value.as_i64() {
            return Ok(Value::from(n));
        }
        if value.as_u64().is_some() {
            return Ok(value.clone());
        }
        if let Some(f) = value.as_f64() {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                return Ok(Value::from(f as i64));
            }
            return Err(WeftError::type_conversion(
                "integer",
                format!("{f} has a fractional part or is out of range"),
            ));
        }
        Err(narrowing_error(ValueType::Integer, value))
    }
}

pub struct NumberConverter;

impl ValueConverter for NumberConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Number
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        display_value(value)
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        let parsed = text.trim().parse::<f64>().map_err(|_| {
            WeftError::type_conversion("number", format!("cannot parse '{text}'"))
        })?;
        Number::from_f64(parsed)
            .map(Value::Number)
            .ok_or_else(|| {
                WeftError::type_conversion("number", format!("'{text}' is not a finite number"))
            })
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::Number(_) => Ok(value.clone()),
            other => Err(narrowing_error(ValueType::Number, other)),
        }
    }
}

pub struct BooleanConverter;

impl ValueConverter for BooleanConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Boolean
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        display_value(value)
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(WeftError::type_conversion(
                "boolean",
                format!("cannot parse '{text}': expected 'true' or 'false'"),
            )),
        }
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(narrowing_error(ValueType::Boolean, other)),
        }
    }
}

pub struct ArrayConverter;

impl ValueConverter for ArrayConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Array
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        display_value(value)
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        match serde_json::from_str::<Value>(text) {
            Ok(value @ Value::Array(_)) => Ok(value),
            _ => Err(WeftError::type_conversion(
                "array",
                format!("'{text}' is not a JSON array"),
            )),
        }
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::Array(_) => Ok(value.clone()),
            other => Err(narrowing_error(ValueType::Array, other)),
        }
    }
}

pub struct ObjectConverter;

impl ValueConverter for ObjectConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Object
    }

    fn to_prompt_string(&self, value: &Value) -> String {
        display_value(value)
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        match serde_json::from_str::<Value>(text) {
            Ok(value @ Value::Object(_)) => Ok(value),
            _ => Err(WeftError::type_conversion(
                "object",
                format!("'{text}' is not a JSON object"),
            )),
        }
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::Object(_) => Ok(value.clone()),
            other => Err(narrowing_error(ValueType::Object, other)),
        }
    }
}

pub struct NullConverter;

impl ValueConverter for NullConverter {
    fn value_type(&self) -> ValueType {
        ValueType::Null
    }

    fn to_prompt_string(&self, _value: &Value) -> String {
        String::new()
    }

    fn from_prompt_string(&self, text: &str) -> WeftResult<Value> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            Ok(Value::Null)
        } else {
            Err(WeftError::type_conversion(
                "null",
                format!("'{text}' is not empty or 'null'"),
            ))
        }
    }

    fn from_object(&self, value: &Value) -> WeftResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            other => Err(narrowing_error(ValueType::Null, other)),
        }
    }
}
