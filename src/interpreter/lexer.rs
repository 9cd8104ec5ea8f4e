use logos::Logos;

use crate::error::{LexError, LexWarning};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Whitespace, newlines and `#` comments are matched but skipped, so they
/// never reach the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. A fractional part needs
    /// at least one digit after the dot.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Single-quoted string literal with its escapes already decoded.
    #[regex(r"'([^'\\]|\\(.|\n))*'", lex_string, allow_greedy = true)]
    #[regex(r"'([^'\\]|\\(.|\n))*\\?", unterminated_string, allow_greedy = true)]
    Str(String),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `else`
    #[token("else")]
    Else,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `^`
    #[token("^")]
    Caret,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `<`
    #[token("<")]
    Less,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `%`
    #[token("%")]
    Percent,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; counted, then dropped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics, and
/// collects warnings that do not stop the scan.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:     usize,
    /// Warnings produced so far.
    pub warnings: Vec<LexWarning>,
}

/// Why the underlying matcher rejected a slice of input.
///
/// `Unrecognized` covers characters that are not part of the language; the
/// scanner drops those. `UnterminatedString` is fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFailure {
    #[default]
    Unrecognized,
    UnterminatedString,
}

/// The result of scanning a source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// The tokens, each paired with the line it was found on.
    pub tokens:   Vec<(Token, usize)>,
    /// Non-fatal problems found while scanning.
    pub warnings: Vec<LexWarning>,
}

/// Converts source text into a sequence of `(Token, line)` pairs.
///
/// Comments, whitespace and newlines are discarded, as is any character that
/// does not belong to the language. Line numbers start at 1.
///
/// # Errors
/// Returns [`LexError::UnexpectedEndOfInput`] if a string literal is not
/// closed before the end of the source.
///
/// # Example
/// ```
/// use tilang::interpreter::lexer::{Token, scan};
///
/// let output = scan("x = 1; # one\ny = 'a';").unwrap();
/// let kinds: Vec<_> = output.tokens.iter().map(|(t, _)| t.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Number(1.0),
///                 Token::Semicolon,
///                 Token::Identifier("y".into()),
///                 Token::Equals,
///                 Token::Str("a".into()),
///                 Token::Semicolon]);
/// assert_eq!(output.tokens[4].1, 2);
/// ```
pub fn scan(source: &str) -> Result<ScanOutput, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line:     1,
                                                           warnings: Vec::new(), });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => {
                // A string literal has already counted its own line breaks.
                let line = lexer.extras.line - lexer.slice().matches('\n').count();
                tokens.push((tok, line));
            },
            Err(LexFailure::Unrecognized) => {},
            Err(LexFailure::UnterminatedString) => {
                return Err(LexError::UnexpectedEndOfInput { line: lexer.extras.line });
            },
        }
    }

    Ok(ScanOutput { tokens,
                    warnings: std::mem::take(&mut lexer.extras.warnings) })
}

impl Token {
    /// Renders the token back into source text.
    ///
    /// String literals are re-quoted with their escapes re-applied, so
    /// scanning the lexeme again yields the same token.
    #[must_use]
    pub fn lexeme(&self) -> String {
        let fixed = match self {
            Self::Number(n) => return n.to_string(),
            Self::Str(s) => return format!("'{}'", escape(s)),
            Self::Identifier(name) => return name.clone(),
            Self::And => "and",
            Self::Or => "or",
            Self::Else => "else",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Return => "return",
            Self::While => "while",
            Self::DoublePipe => "||",
            Self::DoubleAmpersand => "&&",
            Self::Pipe => "|",
            Self::Ampersand => "&",
            Self::Caret => "^",
            Self::BangEqual => "!=",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::Equals => "=",
            Self::GreaterEqual => ">=",
            Self::ShiftRight => ">>",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::ShiftLeft => "<<",
            Self::Less => "<",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Percent => "%",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Tilde => "~",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Comment => "#",
            Self::NewLine => "\n",
            Self::Ignored => " ",
        };
        fixed.to_string()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

/// Escapes a decoded string so it can be placed between single quotes.
///
/// This is the inverse of the decoding done by the lexer.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes a complete string literal, including its quotes.
///
/// Recognized escapes are `\\`, `\b`, `\f`, `\n`, `\r`, `\t`, `\"` and `\'`.
/// Any other escape is kept verbatim and reported as a warning.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\n' {
            lex.extras.line += 1;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                if other == '\n' {
                    lex.extras.line += 1;
                }
                let sequence = format!("\\{other}");
                out.push_str(&sequence);
                lex.extras.warnings.push(LexWarning::UnknownEscape { sequence,
                                                                     line: lex.extras.line });
            },
            None => out.push('\\'),
        }
    }

    out
}

/// Matches a string literal that runs into the end of the input.
fn unterminated_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexFailure> {
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexFailure::UnterminatedString)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        scan(source).unwrap().tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn longest_match_for_two_character_operators() {
        assert_eq!(kinds("&& & || | == = != ! <= << < >= >> >"),
                   vec![Token::DoubleAmpersand,
                        Token::Ampersand,
                        Token::DoublePipe,
                        Token::Pipe,
                        Token::EqualEqual,
                        Token::Equals,
                        Token::BangEqual,
                        Token::Bang,
                        Token::LessEqual,
                        Token::ShiftLeft,
                        Token::Less,
                        Token::GreaterEqual,
                        Token::ShiftRight,
                        Token::Greater]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("and or else fun if return while andy _x1"),
                   vec![Token::And,
                        Token::Or,
                        Token::Else,
                        Token::Fun,
                        Token::If,
                        Token::Return,
                        Token::While,
                        Token::Identifier("andy".into()),
                        Token::Identifier("_x1".into())]);
    }

    #[test]
    fn numbers_need_digits_after_the_dot() {
        assert_eq!(kinds("12 3.25"), vec![Token::Number(12.0), Token::Number(3.25)]);
        // The stray dot is not part of the language and is dropped.
        assert_eq!(kinds("7."), vec![Token::Number(7.0)]);
        assert_eq!(kinds(".5"), vec![Token::Number(5.0)]);
    }

    #[test]
    fn comments_and_newlines_are_discarded_but_counted() {
        let output = scan("a # comment ; b\n\nb").unwrap();
        assert_eq!(output.tokens,
                   vec![(Token::Identifier("a".into()), 1), (Token::Identifier("b".into()), 3)]);
    }

    #[test]
    fn string_escapes_are_decoded() {
        assert_eq!(kinds(r#"'a\tb\n\'q\' \\ \"'"#),
                   vec![Token::Str("a\tb\n'q' \\ \"".into())]);
        assert!(scan(r"'\n'").unwrap().warnings.is_empty());
    }

    #[test]
    fn unknown_escape_is_a_warning_and_passes_through() {
        let output = scan(r"x = 'a\qb';").unwrap();
        assert_eq!(output.tokens[2].0, Token::Str(r"a\qb".into()));
        assert_eq!(output.warnings,
                   vec![LexWarning::UnknownEscape { sequence: r"\q".into(),
                                                    line:     1, }]);
    }

    #[test]
    fn backslash_before_a_line_break_is_only_a_warning() {
        let output = scan("x = 'a\\\nb';\ny").unwrap();
        assert_eq!(output.tokens[2].0, Token::Str("a\\\nb".into()));
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.tokens[4], (Token::Identifier("y".into()), 3));
    }

    #[test]
    fn multi_line_strings_carry_their_opening_line() {
        let output = scan("a\n'one\ntwo\nthree' b").unwrap();
        assert_eq!(output.tokens,
                   vec![(Token::Identifier("a".into()), 1),
                        (Token::Str("one\ntwo\nthree".into()), 2),
                        (Token::Identifier("b".into()), 4)]);
    }

    #[test]
    fn unterminated_string_is_fatal() {
        assert_eq!(scan("print('abc);\n"),
                   Err(LexError::UnexpectedEndOfInput { line: 2 }));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(kinds("a @ $ b"),
                   vec![Token::Identifier("a".into()), Token::Identifier("b".into())]);
    }

    #[test]
    fn lexemes_reconstruct_the_token_stream() {
        let source = "fun f(a, b) { return a << 2 >= 'x\\ty'; } # tail";
        let first = scan(source).unwrap().tokens;
        let rendered = first.iter()
                            .map(|(t, _)| t.lexeme())
                            .collect::<Vec<_>>()
                            .join(" ");
        let second = scan(&rendered).unwrap().tokens;

        assert_eq!(first.into_iter().map(|(t, _)| t).collect::<Vec<_>>(),
                   second.into_iter().map(|(t, _)| t).collect::<Vec<_>>());
    }
}
