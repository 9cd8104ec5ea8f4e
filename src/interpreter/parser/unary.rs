use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `!`  (logical not)
/// - `-`  (numeric negation)
/// - `~`  (bitwise complement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("!" | "-" | "~") unary
///            | call
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line: *line });
    }

    parse_call(tokens)
}

const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Bang => Some(UnaryOperator::Not),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}

/// Parses a primary expression optionally followed by one argument list.
///
/// Calls do not chain: `f(1)(2)` parses `f(1)` and leaves `(2)` for the
/// caller, which then fails on the missing `;`.
///
/// Grammar: `call := primary ("(" (expression ("," expression)*)? ")")?`
fn parse_call(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let callee = parse_primary(tokens)?;

    if let Some((Token::LParen, line)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::Call { callee: Box::new(callee),
                               arguments,
                               line: *line });
    }

    Ok(callee)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := IDENTIFIER | NUMBER | STRING | "(" expression ")"
/// ```
///
/// # Errors
/// Any other token is reported as [`ParseError::UnexpectedToken`] with its
/// lexeme and line.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: tokens.previous_line() });
    };
    let line = *line;

    match token {
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                       line }),
        Token::Number(n) => Ok(Expr::Literal { value: LiteralValue::Number(*n),
                                               line }),
        Token::Str(s) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                            line }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')' after grouping expression")?;
            Ok(expr)
        },
        tok => Err(ParseError::UnexpectedToken { token: tok.lexeme(),
                                                 line }),
    }
}
