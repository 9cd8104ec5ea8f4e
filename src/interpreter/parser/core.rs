use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_declaration},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A forward cursor over scanned tokens.
///
/// Works like a peekable iterator, and can also step back one token and
/// report the line of the last token it handed out.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a (Token, usize)> {
        self.tokens.get(self.position)
    }

    /// Steps back over the most recently consumed token.
    pub const fn rewind(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Line of the last consumed token, or 1 before anything was consumed.
    #[must_use]
    pub fn previous_line(&self) -> usize {
        self.position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(1, |(_, line)| *line)
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }
}

/// Parses a whole program into its top-level declarations.
///
/// Parsing stops at the end of the token stream; the first syntax error
/// aborts it.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use tilang::{
///     ast::Statement,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let tokens = scan("x = 1; print(x);").unwrap().tokens;
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Statement::VariableDeclaration { .. }));
/// assert!(matches!(program[1], Statement::Expression { .. }));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut stream = TokenStream::new(tokens);
    let mut program = Vec::new();

    while !stream.is_at_end() {
        program.push(parse_declaration(&mut stream, false)?);
    }

    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_logical_or(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_rewinds_and_tracks_lines() {
        let tokens = vec![(Token::Identifier("a".into()), 1), (Token::Equals, 2)];
        let mut stream = TokenStream::new(&tokens);

        assert_eq!(stream.previous_line(), 1);
        assert_eq!(stream.next(), Some(&tokens[0]));
        assert_eq!(stream.next(), Some(&tokens[1]));
        assert_eq!(stream.previous_line(), 2);
        assert!(stream.is_at_end());

        stream.rewind();
        assert_eq!(stream.peek(), Some(&tokens[1]));
    }
}
