#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all fatal errors that can occur while scanning source text.
pub enum LexError {
    /// The input ended in the middle of a token (an unterminated string).
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { line } => write!(f,
                                                          "Error on line {line}: End of input reached inside a string literal."),
        }
    }
}

impl std::error::Error for LexError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-fatal problems found while scanning.
///
/// Warnings never stop the scanner; they are handed back next to the tokens
/// so the host decides how to present them.
pub enum LexWarning {
    /// A backslash inside a string literal was followed by a character that is
    /// not a known escape. The sequence is kept as written.
    UnknownEscape {
        /// The escape sequence as it appeared in the source, e.g. `\q`.
        sequence: String,
        /// The source line where the sequence was found.
        line:     usize,
    },
}

impl std::fmt::Display for LexWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEscape { sequence, line } => {
                write!(f, "Warning on line {line}: Unknown escape sequence '{sequence}'.")
            },
        }
    }
}
