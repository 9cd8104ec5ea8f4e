/// Parser entry points and the token cursor.
///
/// Defines [`core::TokenStream`], the `parse` function for whole programs and
/// `parse_expression`, the top of the expression grammar.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication, each folding its operators left-associatively.
pub mod binary;

/// Unary, call and primary expression parsing.
///
/// Handles prefix operators, call syntax and atoms such as literals,
/// identifiers and parenthesized expressions.
pub mod unary;

/// Declaration and statement parsing.
///
/// Covers variable and function declarations, `if`, `while`, `return`, blocks
/// and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses the declarations between `{` and `}`.
pub mod block;

/// Shared helpers for the parser.
///
/// Comma-separated lists, identifiers and required punctuation.
pub mod utils;
