use crate::{
    ast::{BinaryOperator, Expr, OperatorClass},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

type Operand = fn(&mut TokenStream<'_>) -> ParseResult<Expr>;

/// Parses one left-associative precedence level.
///
/// Grammar: `level := operand (op operand)*` where `op` is any operator whose
/// [`BinaryOperator::class`] equals `class`. The resulting node records the
/// line of the operator token.
fn parse_level(tokens: &mut TokenStream<'_>,
               class: OperatorClass,
               operand: Operand)
               -> ParseResult<Expr> {
    let mut left = operand(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.class() == class
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: *line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Both spellings of the logical operators map to the same operator:
/// `or`/`||` and `and`/`&&`.
///
/// # Example
/// ```
/// use tilang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::DoublePipe),
///            Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Or | Token::DoublePipe => Some(BinaryOperator::Or),
        Token::And | Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::LogOr, parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := bit_or ("and" bit_or)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::LogAnd, parse_bit_or)
}

/// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
pub fn parse_bit_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::BitOr, parse_bit_xor)
}

/// Grammar: `bit_xor := bit_and ("^" bit_and)*`
pub fn parse_bit_xor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::BitXor, parse_bit_and)
}

/// Grammar: `bit_and := equality ("&" equality)*`
pub fn parse_bit_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::BitAnd, parse_equality)
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::Equality, parse_comparison)
}

/// Parses relational operators.
///
/// Grammar: `comparison := bitshift ((">" | ">=" | "<" | "<=") bitshift)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::Comparison, parse_bitshift)
}

/// Grammar: `bitshift := additive (("<<" | ">>") additive)*`
pub fn parse_bitshift(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::Bitshift, parse_additive)
}

/// Parses addition, subtraction and remainder expressions.
///
/// `%` shares this level with `+` and `-`, so `7 - 5 % 3` is `(7 - 5) % 3`.
///
/// Grammar: `additive := multiplicative (("+" | "-" | "%") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::Addition, parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_level(tokens, OperatorClass::Multiplication, parse_unary)
}
