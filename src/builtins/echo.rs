//! echo — Format and print a line to stdout.

use crate::value::Value;

use super::{format_template, Builtin};

/// Echo builtin: the first argument's rendering is a printf-style template,
/// the remaining renderings are its positional substitutions. Writes the
/// formatted text plus a newline to stdout and returns `Null`.
pub struct Echo;

impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn call(&self, args: &[Value]) -> Value {
        let Some(template) = args.first() else {
            return Value::error("wrong number of arguments. got=0, want=1");
        };

        let rest: Vec<String> = args[1..].iter().map(Value::to_string).collect();
        println!("{}", format_template(&template.to_string(), &rest));

        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_returns_null() {
        assert_eq!(Echo.call(&[Value::String("hello".into())]), Value::Null);
    }

    #[test]
    fn test_echo_accepts_any_template_type() {
        // The template is the first argument's rendering, whatever its type.
        assert_eq!(Echo.call(&[Value::Int(42)]), Value::Null);
        assert_eq!(
            Echo.call(&[Value::Array(vec![Value::Int(1), Value::Int(2)])]),
            Value::Null
        );
    }

    #[test]
    fn test_echo_with_substitutions() {
        let args = [
            Value::String("%s: %s".into()),
            Value::String("count".into()),
            Value::Int(3),
        ];
        assert_eq!(Echo.call(&args), Value::Null);
    }

    #[test]
    fn test_echo_no_arguments() {
        assert_eq!(
            Echo.call(&[]),
            Value::error("wrong number of arguments. got=0, want=1")
        );
    }
}
