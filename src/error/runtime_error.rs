#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a name that is not bound in any active scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called something that is not a function.
    NotCallable {
        /// The type name of the value that was called.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied by the call.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value was required, but the expression produced none (a call to a
    /// function that finished without `return`).
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Calls nested deeper than the context allows.
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
        /// The source line of the call that went too deep.
        line:  usize,
    },
    /// The result of an integer operation cannot be represented exactly.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: {name}: no such variable in scope.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: Cannot call a non-function ({found}).")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Arity mismatch, expected {expected} arguments, got {found}."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::RecursionLimit { limit, line } => {
                write!(f, "Error on line {line}: Maximum call depth of {limit} exceeded.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
