use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Not`: logical negation under the truthiness rule, producing
///   `Number(1.0)` or `Number(0.0)`.
/// - `Negate`: numeric negation.
/// - `BitNot`: bitwise complement of the operand truncated to an integer.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `TypeError` when the operand has the wrong type, and `Overflow` when a
/// complement cannot be represented exactly.
///
/// # Example
/// ```
/// use tilang::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
/// assert_eq!(v, Value::Number(1.0));
///
/// let v = eval_unary(UnaryOperator::BitNot, &Value::Number(0.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-1.0));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::from(!value.is_truthy(line)?)),
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line, "negate")?)),
        UnaryOperator::BitNot => {
            let n = f64_to_i64_truncated(value.as_number(line, "apply ~ to")?, line)?;
            Ok(Value::Number(i64_to_f64_checked(!n, RuntimeError::Overflow { line })?))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negating_a_string_fails() {
        let err = eval_unary(UnaryOperator::Negate, &"x".into(), 9).unwrap_err();
        assert_eq!(err,
                   RuntimeError::TypeError { details: "Can only negate numbers, found string".into(),
                                             line:    9, });
    }

    #[test]
    fn not_of_numbers() {
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1), Ok(Value::Number(1.0)));
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::Number(-3.0), 1), Ok(Value::Number(0.0)));
    }

    #[test]
    fn complement_truncates_first() {
        assert_eq!(eval_unary(UnaryOperator::BitNot, &Value::Number(5.9), 1),
                   Ok(Value::Number(-6.0)));
    }
}
