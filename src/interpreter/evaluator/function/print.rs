use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Writes each argument to the output, one per line, and returns
    /// `Number(1.0)`.
    ///
    /// Numbers are written in their shortest decimal form (`3`, `2.5`),
    /// strings as their decoded contents and functions as `<fun(a, b)>`.
    ///
    /// # Errors
    /// `Output` if writing to the sink fails.
    ///
    /// # Example
    /// ```
    /// use tilang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// let result = ctx.print(&[Value::Number(3.0), Value::from("hi")], 1).unwrap();
    ///
    /// assert_eq!(result, Value::Number(1.0));
    /// assert_eq!(ctx.into_output(), b"3\nhi\n");
    /// ```
    pub fn print(&mut self, args: &[Value], line: usize) -> EvalResult<Value> {
        for arg in args {
            writeln!(self.out(), "{arg}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                            line })?;
        }
        Ok(Value::Number(1.0))
    }
}
