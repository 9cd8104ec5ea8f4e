use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::core::misrouted,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates `and` or `or` with short-circuiting.
    ///
    /// The left operand is evaluated first. If it decides the result (truthy
    /// for `or`, falsy for `and`) the right operand is never evaluated.
    /// Otherwise the result is the truthiness of the right operand. Either way
    /// the result is `Number(1.0)` or `Number(0.0)`.
    ///
    /// # Errors
    /// `InvalidArgument` if `op` is neither `and` nor `or`; in that case
    /// nothing is evaluated.
    ///
    /// # Example
    /// ```
    /// use tilang::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// let zero = Expr::Literal { value: 0.0.into(),
    ///                            line:  1, };
    /// let missing = Expr::Variable { name: "undefined".into(),
    ///                                line: 1, };
    ///
    /// // `missing` would fail if it were evaluated.
    /// let result = ctx.eval_logic(&zero, BinaryOperator::And, &missing, 1);
    /// assert_eq!(result.unwrap(), Value::Number(0.0));
    /// ```
    pub fn eval_logic(&mut self,
                      left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        if !matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return Err(misrouted(op, "a logical operator", line));
        }

        let left = self.eval_child(left, line)?.is_truthy(line)?;

        match op {
            BinaryOperator::Or if left => return Ok(Value::from(true)),
            BinaryOperator::And if !left => return Ok(Value::from(false)),
            BinaryOperator::Or | BinaryOperator::And => {},
            _ => return Err(misrouted(op, "a logical operator", line)),
        }

        Ok(Value::from(self.eval_child(right, line)?.is_truthy(line)?))
    }
}
