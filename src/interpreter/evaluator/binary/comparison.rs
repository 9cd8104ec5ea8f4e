use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{misrouted, operand_error},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates an equality or ordering operator.
///
/// Operands must be two numbers or two strings. Numbers compare numerically,
/// strings lexicographically. The result is `Number(1.0)` or `Number(0.0)`.
/// A NaN operand makes every comparison false except `!=`.
///
/// # Errors
/// `TypeError` for mixed types or function operands, and `InvalidArgument`
/// if `op` is not an equality or ordering operator.
///
/// # Example
/// ```
/// use tilang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let a = Value::Number(3.0);
/// let b = Value::Number(5.0);
///
/// assert_eq!(eval_comparison(BinaryOperator::Less, &a, &b, 1).unwrap(), Value::Number(1.0));
/// assert_eq!(eval_comparison(BinaryOperator::Equal, &a, &b, 1).unwrap(), Value::Number(0.0));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(operand_error(op, left, right, line)),
    };

    Ok(Value::from(match op {
                       BinaryOperator::Equal => ordering == Some(Ordering::Equal),
                       BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
                       BinaryOperator::Less => ordering == Some(Ordering::Less),
                       BinaryOperator::LessEqual => {
                           matches!(ordering, Some(Ordering::Less | Ordering::Equal))
                       },
                       BinaryOperator::Greater => ordering == Some(Ordering::Greater),
                       BinaryOperator::GreaterEqual => {
                           matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                       },
                       _ => return Err(misrouted(op, "a comparison operator", line)),
                   }))
}
