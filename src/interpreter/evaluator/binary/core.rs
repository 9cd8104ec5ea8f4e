use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, OperatorClass},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_addition, eval_multiplication},
                bitwise::eval_bitwise,
                comparison::eval_comparison,
            },
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

/// Builds the type error reported when `op` cannot combine two operands.
pub(crate) fn operand_error(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: usize)
                            -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

/// Builds the error reported when an operator reaches an evaluation function
/// for a different operator class.
pub(crate) fn misrouted(op: BinaryOperator, expected: &str, line: usize) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("{op} is not {expected}"),
                                    line }
}

/// Evaluates a binary operation between two already evaluated values.
///
/// The operation is routed by operator class. Logical operators are accepted
/// too, but since both operands have already been evaluated they do not
/// short-circuit here; [`Context::eval_binary_op`] is the entry point that
/// does.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tilang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Less, &"abc".into(), &"abd".into(), 1);
/// assert_eq!(result.unwrap(), Value::Number(1.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op.class() {
        OperatorClass::Addition => eval_addition(op, left, right, line),
        OperatorClass::Multiplication => eval_multiplication(op, left, right, line),
        OperatorClass::Equality | OperatorClass::Comparison => {
            eval_comparison(op, left, right, line)
        },
        OperatorClass::BitOr
        | OperatorClass::BitXor
        | OperatorClass::BitAnd
        | OperatorClass::Bitshift => eval_bitwise(op, left, right, line),
        OperatorClass::LogOr => Ok(Value::from(left.is_truthy(line)? || right.is_truthy(line)?)),
        OperatorClass::LogAnd => Ok(Value::from(left.is_truthy(line)? && right.is_truthy(line)?)),
    }
}

impl<W: Write> Context<W> {
    /// Evaluates a binary expression.
    ///
    /// `and` and `or` evaluate their right operand only when the left one does
    /// not decide the result. Every other operator evaluates the left operand,
    /// then the right one, then applies [`eval_binary`].
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(left, op, right, line);
        }

        let left = self.eval_child(left, line)?;
        let right = self.eval_child(right, line)?;
        eval_binary(op, &left, &right, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_are_rejected_by_every_class() {
        use std::rc::Rc;

        use crate::ast::FunctionDef;

        let f = Value::Function(Rc::new(FunctionDef { name:   "f".into(),
                                                      params: Vec::new(),
                                                      body:   Vec::new(),
                                                      line:   1, }));
        for op in [BinaryOperator::Add,
                   BinaryOperator::Mul,
                   BinaryOperator::Equal,
                   BinaryOperator::Less,
                   BinaryOperator::BitOr,
                   BinaryOperator::ShiftLeft,
                   BinaryOperator::Or]
        {
            assert!(matches!(eval_binary(op, &f, &f, 2), Err(RuntimeError::TypeError { line: 2, .. })),
                    "{op} accepted a function");
        }
    }

    #[test]
    fn eager_logic_yields_numbers() {
        assert_eq!(eval_binary(BinaryOperator::Or, &"".into(), &Value::Number(3.0), 1),
                   Ok(Value::Number(1.0)));
        assert_eq!(eval_binary(BinaryOperator::And, &Value::Number(3.0), &"".into(), 1),
                   Ok(Value::Number(0.0)));
    }
}
