use crate::{
    ast::is_reserved_identifier,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `expected`: The token that must come next.
/// - `description`: What was expected, for the error message.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// [`ParseError::ExpectedToken`] carrying the line of the last consumed token.
pub(in crate::interpreter::parser) fn expect(tokens: &mut TokenStream<'_>,
                                             expected: &Token,
                                             description: &str)
                                             -> ParseResult<usize> {
    match tokens.peek() {
        Some((tok, line)) if tok == expected => {
            tokens.next();
            Ok(*line)
        },
        _ => Err(ParseError::ExpectedToken { expected: description.to_string(),
                                             line:     tokens.previous_line(), }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some(_) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or '{closing}'"),
                                                       line:     tokens.previous_line(), });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line: tokens.previous_line() });
            },
        }
    }
    Ok(items)
}

/// Parses a name that is about to be bound: a variable, function or
/// parameter name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the identifier is reserved (`print`),
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_binding_name(tokens: &mut TokenStream<'_>)
                                                         -> ParseResult<String> {
    match tokens.next() {
        Some((Token::Identifier(name), line)) => {
            if is_reserved_identifier(name) {
                return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                            line: *line, });
            }
            Ok(name.clone())
        },
        Some(_) => {
            tokens.rewind();
            Err(ParseError::ExpectedToken { expected: "identifier".to_string(),
                                            line:     tokens.previous_line(), })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: tokens.previous_line() }),
    }
}
