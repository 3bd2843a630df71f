//! Value conversion
//!
//! Every value that crosses the template boundary does so through a
//! converter: function results become prompt text, prompt text becomes
//! typed parameter values, and caller-supplied values narrow to declared
//! parameter types. Converters are looked up by [`ValueType`] in a
//! [`ConverterRegistry`], which callers may extend globally or override
//! per render.

mod builtin;
mod converter;
mod registry;
mod value_type;

pub use builtin::{
    ArrayConverter, BooleanConverter, IntegerConverter, NullConverter, NumberConverter,
    ObjectConverter, StringConverter,
};
pub use converter::ValueConverter;
pub use registry::ConverterRegistry;
pub use value_type::ValueType;
