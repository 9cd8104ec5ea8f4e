/// Lexing errors and warnings.
///
/// Defines the fatal error raised when the scanner runs out of input in the
/// middle of a token, and the non-fatal warnings it collects along the way.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, missing punctuation, misplaced `return` statements and
/// reserved names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// unknown names or calls with the wrong number of arguments.
pub mod runtime_error;

pub use lex_error::{LexError, LexWarning};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that stops a program from running.
///
/// Each phase reports its own error type; this enum lets callers that drive
/// the whole pipeline handle them through a single `Result`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The source text could not be scanned.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
