#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The lexeme of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The line of the last token that was read.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of what was expected, e.g. `';' after expression`.
        expected: String,
        /// The line of the last token that was read.
        line:     usize,
    },
    /// A `return` statement appeared outside of any function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to bind a reserved identifier name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token '{token}' in expression.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected, line } => {
                write!(f, "Error on line {line}: Expected {expected}.")
            },

            Self::ReturnOutsideFunction { line } => write!(f,
                                                           "Error on line {line}: Cannot use 'return' outside a function."),

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
