use std::{fmt, rc::Rc};

use crate::interpreter::lexer::escape;

/// Name of the built-in output function.
pub const PRINT: &str = "print";

/// Names the evaluator handles itself instead of looking them up in scope.
///
/// These names cannot be declared, assigned, used as parameters or passed
/// around as values.
pub const BUILTIN_FUNCTIONS: &[&str] = &[PRINT];

/// Returns `true` if `name` cannot be bound by a program.
///
/// # Example
/// ```
/// use tilang::ast::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("print"));
/// assert!(!is_reserved_identifier("printf"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: numbers and single-quoted strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, escapes already decoded.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every binary precedence level (`or`, `and`, `|`, `^`, `&`, equality,
/// comparison, shifts, addition, multiplication) is a [`Expr::BinaryOp`]
/// carrying the concrete [`BinaryOperator`]; [`BinaryOperator::class`] tells
/// the levels apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`!`, `-` or `~`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tilang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// Function values share the declaration through an `Rc`, so binding a
/// function to a name or passing it as an argument never copies the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The statements of the body. They run directly in the call's scope.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement or declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value;` declares or rebinds a variable.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initializer.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `fun name(params) { body }`
    Function(Rc<FunctionDef>),
    /// A braced sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Conditional statement with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Executed when the condition is truthy. Always a [`Statement::Block`].
        then_branch: Box<Self>,
        /// Either a block or a chained `if`.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Loop that runs its body while the condition is truthy.
    While {
        /// The condition expression, evaluated before each iteration.
        condition: Expr,
        /// The loop body. Always a [`Statement::Block`].
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return value;` leaves the innermost function call.
    Return {
        /// The value handed back to the caller.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

/// The precedence level a binary operator belongs to, lowest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperatorClass {
    LogOr,
    LogAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Comparison,
    Bitshift,
    Addition,
    Multiplication,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`or`, `||`)
    Or,
    /// Logical and (`and`, `&&`)
    And,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Remainder (`%`)
    Mod,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the precedence level of the operator.
    ///
    /// ```
    /// use tilang::ast::{BinaryOperator, OperatorClass};
    ///
    /// assert_eq!(BinaryOperator::Mod.class(), OperatorClass::Addition);
    /// assert!(BinaryOperator::Mul.class() > BinaryOperator::Add.class());
    /// ```
    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Self::Or => OperatorClass::LogOr,
            Self::And => OperatorClass::LogAnd,
            Self::BitOr => OperatorClass::BitOr,
            Self::BitXor => OperatorClass::BitXor,
            Self::BitAnd => OperatorClass::BitAnd,
            Self::Equal | Self::NotEqual => OperatorClass::Equality,
            Self::Greater | Self::GreaterEqual | Self::Less | Self::LessEqual => {
                OperatorClass::Comparison
            },
            Self::ShiftLeft | Self::ShiftRight => OperatorClass::Bitshift,
            Self::Add | Self::Sub | Self::Mod => OperatorClass::Addition,
            Self::Mul | Self::Div => OperatorClass::Multiplication,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Bitwise complement (e.g. `~x`).
    BitNot,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Or => "or",
            And => "and",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Sub => "-",
            Mod => "%",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{}'", escape(s)),
        }
    }
}

// Binary and unary expressions are fully parenthesized so a rendering parses
// back into the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl Statement {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Self::Expression { expr, .. } => writeln!(f, "{pad}{expr};"),
            Self::VariableDeclaration { name, value, .. } => writeln!(f, "{pad}{name} = {value};"),
            Self::Function(def) => {
                writeln!(f, "{pad}fun {}({}) {{", def.name, def.params.join(", "))?;
                fmt_body(f, &def.body, depth + 1)?;
                writeln!(f, "{pad}}}")
            },
            Self::Block { statements, .. } => {
                writeln!(f, "{pad}{{")?;
                fmt_body(f, statements, depth + 1)?;
                writeln!(f, "{pad}}}")
            },
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                write!(f, "{pad}if {condition} ")?;
                fmt_if_tail(f, then_branch, else_branch.as_deref(), depth)
            },
            Self::While { condition, body, .. } => {
                write!(f, "{pad}while {condition} ")?;
                fmt_branch(f, body, depth)?;
                writeln!(f)
            },
            Self::Return { value, .. } => writeln!(f, "{pad}return {value};"),
        }
    }
}

fn fmt_body(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
    statements.iter()
              .try_for_each(|statement| statement.fmt_indented(f, depth))
}

/// Writes `{ ... }` for a branch body, without a trailing newline.
fn fmt_branch(f: &mut fmt::Formatter<'_>, branch: &Statement, depth: usize) -> fmt::Result {
    writeln!(f, "{{")?;
    match branch {
        Statement::Block { statements, .. } => fmt_body(f, statements, depth + 1)?,
        other => other.fmt_indented(f, depth + 1)?,
    }
    write!(f, "{}}}", "    ".repeat(depth))
}

fn fmt_if_tail(f: &mut fmt::Formatter<'_>,
               then_branch: &Statement,
               else_branch: Option<&Statement>,
               depth: usize)
               -> fmt::Result {
    fmt_branch(f, then_branch, depth)?;
    match else_branch {
        None => writeln!(f),
        Some(Statement::If { condition,
                             then_branch,
                             else_branch,
                             .. }) => {
            write!(f, " else if {condition} ")?;
            fmt_if_tail(f, then_branch, else_branch.as_deref(), depth)
        },
        Some(block) => {
            write!(f, " else ")?;
            fmt_branch(f, block, depth)?;
            writeln!(f)
        },
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
