//! int — Convert a value to an integer.

use crate::value::Value;

use super::{check_arity, Builtin};

/// Int builtin: identity on integers, base-10 parse on strings.
pub struct Int;

impl Builtin for Int {
    fn name(&self) -> &'static str {
        "int"
    }

    fn call(&self, args: &[Value]) -> Value {
        if let Some(err) = check_arity(args, 1) {
            return err;
        }

        match &args[0] {
            Value::Int(n) => Value::Int(*n),
            Value::String(s) => match s.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => Value::error(format!(
                    "int(...) can only be called on strings which represent integers, '{s}' given"
                )),
            },
            other => Value::error(format!(
                "argument to `int` not supported, got {}",
                other.type_name()
            )),
        }
    }
}
