use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::misrouted, core::EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// Evaluates `|`, `^`, `&`, `<<` and `>>`.
///
/// Both operands must be numbers. They are truncated toward zero to 64-bit
/// integers, combined, and the result is converted back to a number. `>>` is
/// an arithmetic shift, so negative numbers stay negative.
///
/// # Errors
/// - `TypeError` for non-numbers, NaN and infinities.
/// - `InvalidArgument` for a shift count outside `0..64`.
/// - `Overflow` when an operand or the result cannot be represented exactly.
/// - `InvalidArgument` if `op` is not a bitwise operator.
///
/// # Example
/// ```
/// use tilang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::bitwise::eval_bitwise, value::core::Value},
/// };
///
/// let and = eval_bitwise(BinaryOperator::BitAnd, &Value::Number(6.0), &Value::Number(3.0), 1);
/// assert_eq!(and.unwrap(), Value::Number(2.0));
///
/// let shl = eval_bitwise(BinaryOperator::ShiftLeft, &Value::Number(1.5), &Value::Number(4.0), 1);
/// assert_eq!(shl.unwrap(), Value::Number(16.0));
/// ```
pub fn eval_bitwise(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<Value> {
    use BinaryOperator::{BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight};

    if !matches!(op, BitOr | BitXor | BitAnd | ShiftLeft | ShiftRight) {
        return Err(misrouted(op, "a bitwise operator", line));
    }

    let operation = format!("apply {op} to");
    let a = f64_to_i64_truncated(left.as_number(line, &operation)?, line)?;
    let b = f64_to_i64_truncated(right.as_number(line, &operation)?, line)?;

    let result = match op {
        BinaryOperator::BitOr => a | b,
        BinaryOperator::BitXor => a ^ b,
        BinaryOperator::BitAnd => a & b,
        BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => {
            let shift = u32::try_from(b).ok()
                                        .filter(|s| *s < i64::BITS)
                                        .ok_or_else(|| RuntimeError::InvalidArgument {
                                            details: format!("Shift count must be between 0 and 63, found {b}"),
                                            line,
                                        })?;
            if op == BinaryOperator::ShiftLeft {
                a << shift
            } else {
                a >> shift
            }
        },
        _ => return Err(misrouted(op, "a bitwise operator", line)),
    };

    Ok(Value::Number(i64_to_f64_checked(result, RuntimeError::Overflow { line })?))
}
