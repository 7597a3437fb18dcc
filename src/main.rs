//! shale CLI entry point.
//!
//! Usage:
//!   shale tokens <file>        # Dump the token stream of a script
//!   shale tokens               # Same, reading from stdin

use std::env;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shale::{Lexer, TokenKind};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None | Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("shale {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("tokens") => {
            let source = match args.get(2) {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read {path}"))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            dump_tokens(&source);
            Ok(ExitCode::SUCCESS)
        }

        Some(other) => bail!("unknown command: {other} (try --help)"),
    }
}

/// Print one `KIND(literal)` line per token, ending with `EOF`.
fn dump_tokens(source: &str) {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        println!("{token}");
        if token.kind == TokenKind::Eof {
            break;
        }
    }
}

fn print_help() {
    println!("shale - the shale scripting language front end");
    println!();
    println!("Usage:");
    println!("  shale tokens <file>   Dump the token stream of a script");
    println!("  shale tokens          Same, reading the script from stdin");
    println!("  shale --version       Print version");
    println!("  shale --help          Show this help");
}
