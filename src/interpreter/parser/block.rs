use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_declaration,
        },
    },
};

/// Parses the declarations of a block up to and including the closing brace.
///
/// The opening `{` must already have been consumed.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `in_function`: Whether the block is (inside) a function body, which is
///   what allows `return`.
///
/// # Errors
/// [`ParseError::ExpectedToken`] if the input ends before the `}`.
pub fn parse_block(tokens: &mut TokenStream<'_>, in_function: bool) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_declaration(tokens, in_function)?),
            None => {
                return Err(ParseError::ExpectedToken { expected: "'}' after block".to_string(),
                                                       line:     tokens.previous_line(), });
            },
        }
    }
}
