//! Runtime value model.
//!
//! [`Value`] is the closed tagged union every shale expression evaluates to.
//! Values are immutable after construction: builtins and the evaluator
//! produce new values rather than mutating in place, so a `Value` can be
//! shared freely (including across threads) without locking.
//!
//! Failure travels in-band: a builtin that cannot do its job returns
//! [`Value::Error`] instead of panicking or returning a `Result`. Callers
//! must check for the `Error` variant after every builtin call and stop
//! evaluating the enclosing expression, surfacing the message unchanged.

use std::fmt;
use std::sync::Arc;

use crate::builtins::Builtin;

/// A runtime value.
///
/// Adding a variant is a deliberate compile-time checklist: every builtin
/// matches exhaustively on its argument types, so each one must be revisited.
#[derive(Clone)]
pub enum Value {
    /// The unit value, rendered as `null`.
    Null,
    /// 64-bit signed integer.
    Int(i64),
    /// Text.
    String(String),
    /// Ordered, possibly heterogeneous sequence.
    Array(Vec<Value>),
    /// A registry-resolved builtin function.
    Builtin(Arc<dyn Builtin>),
    /// An in-band failure carrying its message.
    Error(String),
}

impl Value {
    /// Short type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Int(_) => "Integer",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Builtin(_) => "Builtin",
            Value::Error(_) => "Error",
        }
    }

    /// Construct an error value.
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// True if this is the error variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    /// Human-readable rendering: integers in decimal, strings as raw text,
    /// arrays as bracketed comma-joined elements, errors as their message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(message) => f.write_str(message),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Value::Builtin(b) => f.debug_tuple("Builtin").field(&b.name()).finish(),
            Value::Error(message) => f.debug_tuple("Error").field(message).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // Builtins are registry singletons; the name identifies one.
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}
