//! # tilang
//!
//! tilang is a small dynamically typed scripting language with a tree-walking
//! interpreter. Source text goes through three stages:
//!
//! 1. [`scan`] turns it into tokens,
//! 2. [`parse`] turns the tokens into a list of statements,
//! 3. [`execute`] runs the statements against a fresh scope stack.
//!
//! [`run`] and [`run_with_output`] chain the three stages.
//!
//! ```
//! let mut out = Vec::new();
//! let source = "fun add(a, b) { return a + b; }\nprint(add(2, 3));";
//!
//! assert_eq!(tilang::run_with_output(source, &mut out).unwrap(), 0);
//! assert_eq!(out, b"5\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, execute},
        lexer::{ScanOutput, scan},
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// Declares the `Expr` and `Statement` trees built by the parser and walked by
/// the evaluator. Every node carries the line it came from. The `Display`
/// implementations render a tree back into source form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum carrying the source line. [`Error`]
/// wraps all three for callers that run the whole pipeline.
pub mod error;
/// The lexer, parser and evaluator.
pub mod interpreter;
/// Numeric conversion helpers shared by the evaluator.
pub mod util;

/// Scans, parses and executes `source`, printing to standard output.
///
/// Lexer warnings are ignored; call [`scan`] directly to inspect them.
///
/// # Returns
/// The program's exit status.
///
/// # Examples
/// ```
/// use tilang::run;
///
/// assert!(run("x = 1;").is_ok());
///
/// // 'y' is not defined
/// assert!(run("x = y + 1;").is_err());
/// ```
pub fn run(source: &str) -> Result<i32, Error> {
    run_with_output(source, std::io::stdout())
}

/// Scans, parses and executes `source`, sending `print` output to `out`.
///
/// # Returns
/// The program's exit status.
///
/// # Errors
/// The first lexical, syntax or runtime error. Output written before a
/// runtime error stays in `out`.
pub fn run_with_output<W: Write>(source: &str, out: W) -> Result<i32, Error> {
    let tokens = scan(source)?.tokens;
    let program = parse(&tokens)?;
    let mut context = Context::with_output(out);
    Ok(context.execute(&program)?)
}
