use std::io::Write;

use crate::{
    ast::{Expr, FunctionDef, PRINT},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::{Binding, Value},
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a call expression.
    ///
    /// A call to `print` is handled directly. Any other callee is evaluated
    /// and must produce a function whose parameter count equals the number of
    /// arguments. The arguments are then evaluated left to right and the
    /// function is invoked with [`Context::call_function`].
    ///
    /// # Returns
    /// The returned value, or `None` if the body finished without `return`.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - `RecursionLimit` if the call would nest deeper than the context's
    ///   maximum call depth.
    /// - Any error raised while evaluating the arguments or the body.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Option<Value>> {
        if let Expr::Variable { name, .. } = callee
           && name == PRINT
        {
            let values = self.eval_arguments(arguments, line)?;
            return self.print(&values, line).map(Some);
        }

        let def = match self.eval_child(callee, line)? {
            Value::Function(def) => def,
            other => {
                return Err(RuntimeError::NotCallable { found: other.type_name().to_string(),
                                                       line });
            },
        };

        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: def.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        let values = self.eval_arguments(arguments, line)?;

        if self.call_depth >= self.max_call_depth() {
            return Err(RuntimeError::RecursionLimit { limit: self.max_call_depth(),
                                                      line });
        }
        self.call_depth += 1;
        let result = self.call_function(&def, values);
        self.call_depth -= 1;
        result
    }

    /// Runs a function body with its parameters bound to `args`.
    ///
    /// A fresh scope holds the parameters. Function arguments are bound as
    /// functions, everything else as variables. The scope is popped when the
    /// call ends, including when the body returns early or fails. Names that
    /// are not parameters resolve against whatever scopes are active at the
    /// call.
    ///
    /// The caller is responsible for checking that `args` has one value per
    /// parameter; surplus values are ignored.
    ///
    /// # Example
    /// ```
    /// use tilang::interpreter::{
    ///     evaluator::core::Context, lexer::scan, parser::core::parse, value::core::Value,
    /// };
    ///
    /// let tokens = scan("fun twice(x) { return x * 2; }").unwrap().tokens;
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// ctx.exec_statement(&program[0]).unwrap();
    ///
    /// let Value::Function(def) = ctx.lookup("twice", 1).unwrap() else {
    ///     panic!("twice is not a function");
    /// };
    /// let result = ctx.call_function(&def, vec![Value::Number(21.0)]).unwrap();
    ///
    /// assert_eq!(result, Some(Value::Number(42.0)));
    /// assert_eq!(ctx.depth(), 1);
    /// ```
    pub fn call_function(&mut self, def: &FunctionDef, args: Vec<Value>) -> EvalResult<Option<Value>> {
        let mut frame = self.scoped();
        for (param, value) in def.params.iter().zip(args) {
            frame.define_local(param, Binding::from(value));
        }

        match frame.exec_statements(&def.body)? {
            Flow::Return(value) => Ok(Some(value)),
            Flow::Normal => Ok(None),
        }
    }

    /// Evaluates call arguments left to right.
    fn eval_arguments(&mut self, arguments: &[Expr], line: usize) -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|arg| self.eval_child(arg, line))
                 .collect()
    }
}
