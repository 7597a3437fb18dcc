//! shale: front end and value runtime for the shale scripting language.
//!
//! shale blends conventional expression syntax with first-class embedded
//! shell commands (`$(ls *.go)`, pipelines with `|`). This crate provides:
//!
//! - **Token**: token kinds and literals, the vocabulary shared with the parser
//! - **Lexer**: a hand-written pull lexer producing one token per call
//! - **Value**: the tagged-union runtime value model
//! - **Builtins**: the builtin trait, registry, and the native functions
//!
//! The parser, evaluator, and the machinery that actually runs captured
//! command text live downstream of this crate. Builtins report failure by
//! returning [`Value::Error`] in-band; consumers must check for it after
//! every call.

pub mod builtins;
pub mod lexer;
pub mod token;
pub mod value;

pub use builtins::{register_builtins, Builtin, BuiltinRegistry};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
pub use value::Value;
