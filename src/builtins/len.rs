//! len — Element count of an array, character count of a string.

use crate::value::Value;

use super::{check_arity, Builtin};

/// Len builtin: polymorphic length.
pub struct Len;

impl Builtin for Len {
    fn name(&self) -> &'static str {
        "len"
    }

    fn call(&self, args: &[Value]) -> Value {
        if let Some(err) = check_arity(args, 1) {
            return err;
        }

        match &args[0] {
            Value::Array(elements) => Value::Int(elements.len() as i64),
            Value::String(s) => Value::Int(s.chars().count() as i64),
            other => Value::error(format!(
                "argument to `len` not supported, got {}",
                other.type_name()
            )),
        }
    }
}
