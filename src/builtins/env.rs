//! env — Read a process environment variable.

use crate::value::Value;

use super::{check_arity, Builtin};

/// Env builtin: the named environment variable's value, or `""` if unset.
///
/// Reads the host process environment directly on every call; no caching.
pub struct Env;

impl Builtin for Env {
    fn name(&self) -> &'static str {
        "env"
    }

    fn call(&self, args: &[Value]) -> Value {
        if let Some(err) = check_arity(args, 1) {
            return err;
        }

        match &args[0] {
            Value::String(name) => {
                Value::String(std::env::var(name).unwrap_or_default())
            }
            other => Value::error(format!(
                "argument to `env` not supported, got {}",
                other.type_name()
            )),
        }
    }
}
