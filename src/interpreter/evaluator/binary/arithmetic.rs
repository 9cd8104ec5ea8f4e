use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::{misrouted, operand_error},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates `+`, `-` and `%`.
///
/// Both operands must have the same type. Numbers support all three
/// operators; strings only support `+`, which concatenates them. The result
/// of `%` takes the sign of the right operand, so `-5 % 3` is `1`.
///
/// # Errors
/// - `TypeError` for mixed types, functions, and string `-` or `%`.
/// - `DivisionByZero` for `%` with a zero right operand.
/// - `InvalidArgument` if `op` is not one of the three operators.
///
/// # Example
/// ```
/// use tilang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_addition, value::core::Value},
/// };
///
/// let joined = eval_addition(BinaryOperator::Add, &"ab".into(), &"cd".into(), 1).unwrap();
/// assert_eq!(joined, Value::from("abcd"));
///
/// let rem = eval_addition(BinaryOperator::Mod, &Value::Number(5.0), &Value::Number(2.0), 1);
/// assert_eq!(rem.unwrap(), Value::Number(1.0));
///
/// assert!(eval_addition(BinaryOperator::Add, &"1".into(), &Value::Number(1.0), 1).is_err());
/// ```
pub fn eval_addition(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<Value> {
    use BinaryOperator::{Add, Mod, Sub};
    use Value::{Number, Str};

    if !matches!(op, Add | Sub | Mod) {
        return Err(misrouted(op, "an additive operator", line));
    }

    match (op, left, right) {
        (Add, Number(a), Number(b)) => Ok(Number(a + b)),
        (Sub, Number(a), Number(b)) => Ok(Number(a - b)),
        (Mod, Number(_), Number(b)) if *b == 0.0 => Err(RuntimeError::DivisionByZero { line }),
        (Mod, Number(a), Number(b)) => Ok(Number(floored_remainder(*a, *b))),
        (Add, Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
        _ => Err(operand_error(op, left, right, line)),
    }
}

/// Remainder of a division rounded toward negative infinity.
///
/// Unlike `f64::rem`, the result has the sign of `b`, and a zero result is
/// `+0` or `-0` to match.
fn floored_remainder(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r == 0.0 {
        0.0_f64.copysign(b)
    } else if (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Evaluates `*` and `/`. Both operands must be numbers.
///
/// # Errors
/// - `TypeError` if either operand is not a number.
/// - `DivisionByZero` for `/` with a zero right operand.
/// - `InvalidArgument` if `op` is neither `*` nor `/`.
pub fn eval_multiplication(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
    if !matches!(op, BinaryOperator::Mul | BinaryOperator::Div) {
        return Err(misrouted(op, "a multiplicative operator", line));
    }

    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(operand_error(op, left, right, line));
    };

    match op {
        BinaryOperator::Mul => Ok(Value::Number(a * b)),
        BinaryOperator::Div => {
            if *b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Number(a / b))
        },
        _ => Err(misrouted(op, "a multiplicative operator", line)),
    }
}
