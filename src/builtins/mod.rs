//! Builtin functions.
//!
//! Builtins are named native operations resolved through a
//! [`BuiltinRegistry`]. Each one is a pure function from an ordered argument
//! list to a single [`Value`]; failure is reported by returning
//! [`Value::Error`], never by panicking.
//!
//! Every builtin follows the same dispatch discipline: validate arity first,
//! then switch on the runtime type of each argument. The type switches are
//! exhaustive, so adding a `Value` variant forces every builtin to be
//! revisited.

mod echo;
mod env;
mod format;
mod int;
mod len;

use std::collections::HashMap;
use std::sync::Arc;

use crate::value::Value;

pub(crate) use format::format_template;

/// A builtin function: a name and a pure operation over argument lists.
pub trait Builtin: Send + Sync {
    /// The builtin's name (used for registry lookup).
    fn name(&self) -> &'static str;

    /// Apply the builtin to already-evaluated arguments.
    ///
    /// Always returns a value; invalid input comes back as [`Value::Error`].
    fn call(&self, args: &[Value]) -> Value;
}

/// Name-keyed registry of builtins.
///
/// Built once at startup and read-only afterwards, so it can be shared
/// across evaluators without synchronization.
#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: HashMap<&'static str, Arc<dyn Builtin>>,
}

impl BuiltinRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builtin under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, builtin: impl Builtin + 'static) {
        tracing::debug!(name = builtin.name(), "registering builtin");
        self.builtins.insert(builtin.name(), Arc::new(builtin));
    }

    /// Look up a builtin by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Builtin>> {
        self.builtins.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.builtins.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Register the fixed builtin set with the registry.
pub fn register_builtins(registry: &mut BuiltinRegistry) {
    registry.register(echo::Echo);
    registry.register(env::Env);
    registry.register(int::Int);
    registry.register(len::Len);
}

/// Arity check shared by the builtins: `None` when the count matches, the
/// error value to return otherwise.
pub(crate) fn check_arity(args: &[Value], want: usize) -> Option<Value> {
    if args.len() == want {
        return None;
    }
    Some(Value::error(format!(
        "wrong number of arguments. got={}, want={}",
        args.len(),
        want
    )))
}
