/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST, maintaining a stack of scopes, and produces
/// the program's output.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Manages scopes, declarations and function calls without closures.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// paired with the line it was found on. Whitespace, newlines and `#` comments
/// are discarded.
///
/// # Responsibilities
/// - Recognizes numbers, strings, identifiers, keywords and operators.
/// - Decodes escape sequences in string literals, warning about unknown ones.
/// - Reports an unterminated string as a lexical error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive descent parser with one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into declarations, statements and expressions.
/// - Rejects `return` outside of function bodies and reserved names in
///   declarations.
/// - Reports the expected token and the line of the last consumed token on
///   structural errors.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings and functions. There is no boolean type;
/// truth values are the numbers `1` and `0`.
pub mod value;
