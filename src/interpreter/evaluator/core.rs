use std::{
    collections::HashMap,
    io::{self, Write},
};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::unary::eval_unary,
        value::core::{Binding, Value},
    },
};

/// Default limit on nested function calls.
pub const MAX_CALL_DEPTH: usize = 1000;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Return` carries the value of a `return` statement up to the nearest
/// enclosing call, which turns it into the call's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` is unwinding to the enclosing call.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the stack of scopes and the sink
/// that `print` writes to.
///
/// ## Usage
///
/// A `Context` runs one program at a time. Separate contexts share nothing,
/// so tests can run programs side by side and capture output by passing a
/// `Vec<u8>` as the sink.
///
/// ```
/// use tilang::interpreter::{evaluator::core::Context, lexer::scan, parser::core::parse};
///
/// let tokens = scan("print(1 + 2);").unwrap().tokens;
/// let program = parse(&tokens).unwrap();
///
/// let mut context = Context::with_output(Vec::new());
/// assert_eq!(context.execute(&program).unwrap(), 0);
/// assert_eq!(context.into_output(), b"3\n");
/// ```
pub struct Context<W: Write = io::Stdout> {
    /// Innermost scope last. The first entry is the global scope and is never
    /// popped.
    pub scope_stack:       Vec<HashMap<String, Binding>>,
    pub(crate) call_depth: usize,
    max_call_depth:        usize,
    out:                   W,
}

impl Context<io::Stdout> {
    /// Creates a context with a single, empty global scope that prints to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Context<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Context<W> {
    /// Creates a context with a single, empty global scope that prints to
    /// `out`.
    pub fn with_output(out: W) -> Self {
        Self { scope_stack:    vec![HashMap::new()],
               call_depth:     0,
               max_call_depth: MAX_CALL_DEPTH,
               out }
    }

    /// Sets how deeply function calls may nest before a call fails with
    /// `RecursionLimit`. The default is [`MAX_CALL_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use tilang::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, lexer::scan, parser::core::parse},
    /// };
    ///
    /// let source = "fun down(n) { if n == 0 { return 0; } return down(n - 1); }\nprint(down(5));";
    /// let program = parse(&scan(source).unwrap().tokens).unwrap();
    ///
    /// let mut ctx = Context::with_output(Vec::new()).with_max_call_depth(3);
    /// assert_eq!(ctx.execute(&program),
    ///            Err(RuntimeError::RecursionLimit { limit: 3, line: 1 }));
    /// ```
    #[must_use]
    pub const fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Limit on nested function calls.
    #[must_use]
    pub const fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Runs a parsed program.
    ///
    /// The program runs in a fresh scope pushed on top of the global scope;
    /// that scope is popped again when the program ends, whether it succeeds
    /// or fails.
    ///
    /// # Returns
    /// The exit status, `0`.
    ///
    /// # Errors
    /// The first runtime error aborts the program and is returned.
    pub fn execute(&mut self, program: &[Statement]) -> EvalResult<i32> {
        let mut frame = self.scoped();
        for statement in program {
            // `return` only parses inside a function body, so no `Return`
            // reaches this loop.
            if let Flow::Return(_) = frame.exec_statement(statement)? {
                break;
            }
        }
        drop(frame);

        self.out.flush().map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                             line:    0, })?;
        Ok(0)
    }

    /// Runs statements in order until one of them returns.
    pub(crate) fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let flow @ Flow::Return(_) = self.exec_statement(statement)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// [`Flow::Return`] when a `return` statement ran, either directly or in a
    /// nested block or loop; [`Flow::Normal`] otherwise.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::VariableDeclaration { name, value, line } => {
                let value = self.eval_child(value, *line)?;
                self.declare(name, Binding::Variable(value));
                Ok(Flow::Normal)
            },
            Statement::Function(def) => {
                self.declare(&def.name, Binding::Function(def.clone()));
                Ok(Flow::Normal)
            },
            Statement::Block { statements, .. } => self.scoped().exec_statements(statements),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval_child(condition, *line)?.is_truthy(*line)? {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, line } => {
                while self.eval_child(condition, *line)?.is_truthy(*line)? {
                    if let flow @ Flow::Return(_) = self.exec_statement(body)? {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::Return { value, line } => Ok(Flow::Return(self.eval_child(value, *line)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for a
    /// call to a function that finished without `return`.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(Value::from(value))),
            Expr::Variable { name, line } => self.lookup(name, *line).map(Some),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval_child(expr, *line)?;
                eval_unary(*op, &value, *line).map(Some)
            },
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line).map(Some)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        }
    }
}

/// Runs a parsed program in a new context that prints to standard output.
///
/// # Errors
/// The first runtime error raised by the program.
pub fn execute(program: &[Statement]) -> EvalResult<i32> {
    Context::new().execute(program)
}
