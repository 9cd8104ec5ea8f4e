use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, TokenStream, parse_expression},
            utils::{expect, parse_binding_name, parse_comma_separated},
        },
    },
};

/// Parses a single declaration.
///
/// A declaration may be one of:
/// - a variable declaration, `name = expression;`
/// - a function declaration, `fun name(params) { ... }`
/// - any other statement.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `in_function`: `true` while parsing a function body; only then is
///   `return` accepted.
pub fn parse_declaration(tokens: &mut TokenStream<'_>, in_function: bool) -> ParseResult<Statement> {
    match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_variable_declaration(tokens),
        Some((Token::Fun, _)) => parse_function_declaration(tokens),
        _ => parse_statement(tokens, in_function),
    }
}

/// Parses a statement.
///
/// Grammar:
/// ```text
/// statement := "{" declaration* "}"
///            | "if" expression block ("else" ("if" ... | block))?
///            | "return" expression ";"
///            | "while" expression block
///            | expression ";"
/// ```
pub fn parse_statement(tokens: &mut TokenStream<'_>, in_function: bool) -> ParseResult<Statement> {
    match tokens.peek() {
        Some((Token::LBrace, line)) => {
            tokens.next();
            let statements = parse_block(tokens, in_function)?;
            Ok(Statement::Block { statements,
                                  line: *line })
        },
        Some((Token::If, line)) => {
            tokens.next();
            parse_if(tokens, *line, in_function)
        },
        Some((Token::Return, line)) => {
            if !in_function {
                return Err(ParseError::ReturnOutsideFunction { line: *line });
            }
            tokens.next();
            let value = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon, "';' after return value")?;
            Ok(Statement::Return { value,
                                   line: *line })
        },
        Some((Token::While, line)) => {
            tokens.next();
            let condition = parse_expression(tokens)?;
            let body = parse_braced(tokens, "'{' after while condition", in_function)?;
            Ok(Statement::While { condition,
                                  body: Box::new(body),
                                  line: *line })
        },
        _ => parse_expression_statement(tokens),
    }
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// The `if` keyword must already have been consumed.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     else if <condition> { ... }
///     else { ... }
/// ```
fn parse_if(tokens: &mut TokenStream<'_>, line: usize, in_function: bool) -> ParseResult<Statement> {
    let condition = parse_expression(tokens)?;
    let then_branch = parse_braced(tokens, "'{' after if condition", in_function)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, else_if_line)) => {
                    tokens.next();
                    Some(Box::new(parse_if(tokens, *else_if_line, in_function)?))
                },
                _ => Some(Box::new(parse_braced(tokens, "'{' after else", in_function)?)),
            }
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses `{ declaration* }` into a [`Statement::Block`].
fn parse_braced(tokens: &mut TokenStream<'_>,
                description: &str,
                in_function: bool)
                -> ParseResult<Statement> {
    let line = expect(tokens, &Token::LBrace, description)?;
    let statements = parse_block(tokens, in_function)?;
    Ok(Statement::Block { statements, line })
}

/// Parses a variable declaration, `name = expression;`.
///
/// The identifier is consumed provisionally. If it is not followed by `=`,
/// the stream steps back and the input is parsed as an expression statement
/// instead, so `f(1);` and `x + 1;` still work.
fn parse_variable_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.next();
    let is_declaration = matches!(tokens.peek(), Some((Token::Equals, _)));
    tokens.rewind();

    if !is_declaration {
        return parse_expression_statement(tokens);
    }

    let line = tokens.peek().map_or(1, |(_, l)| *l);
    let name = parse_binding_name(tokens)?;
    expect(tokens, &Token::Equals, "'=' after variable name")?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after variable initializer")?;

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses a function declaration of the form
/// `fun name(param1, param2, ...) { body }`.
///
/// The body is parsed with `in_function` set, whatever the surrounding
/// context.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is missing or reserved,
/// - parentheses or braces are missing,
/// - the body fails to parse.
fn parse_function_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let line = expect(tokens, &Token::Fun, "'fun'")?;
    let name = parse_binding_name(tokens)?;
    expect(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_binding_name, &Token::RParen)?;
    expect(tokens, &Token::LBrace, "'{' after function header")?;
    let body = parse_block(tokens, true)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                 params,
                                                 body,
                                                 line })))
}

/// Parses an expression followed by `;`.
fn parse_expression_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let line = tokens.peek().map_or_else(|| tokens.previous_line(), |(_, l)| *l);
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after expression")?;

    Ok(Statement::Expression { expr, line })
}
