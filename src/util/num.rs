use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to `f64` if and only if the conversion is exact.
///
/// Every integer up to `2^53` in magnitude converts exactly, and so do larger
/// ones whose low bits are zero, such as `2^60`.
///
/// ## Errors
/// Returns `Err(error)` if the nearest `f64` differs from `value`.
///
/// ## Example
/// ```
/// use tilang::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(42, "inexact").unwrap(), 42.0);
/// assert_eq!(i64_to_f64_checked(1 << 60, "inexact").unwrap(), 1_152_921_504_606_846_976.0);
///
/// // 2^53 + 1 lies between two doubles.
/// assert!(i64_to_f64_checked((1 << 53) + 1, "inexact").is_err());
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    let converted = value as f64;
    // Compare in i128: `2^63` does not fit back into an i64.
    if converted as i128 != i128::from(value) {
        return Err(error);
    }
    Ok(converted)
}

/// Truncates an `f64` toward zero and converts it to an `i64`.
///
/// ## Errors
/// Returns a `TypeError` for NaN and infinities, and `Overflow` when the
/// truncated value does not fit in an `i64`.
///
/// ## Example
/// ```
/// use tilang::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(6.9, 1).unwrap(), 6);
/// assert_eq!(f64_to_i64_truncated(-6.9, 1).unwrap(), -6);
/// assert!(matches!(f64_to_i64_truncated(f64::NAN, 3),
///                  Err(RuntimeError::TypeError { line: 3, .. })));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot convert {value} to an integer"),
                                             line });
    }

    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }

    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_rejects_out_of_range_values() {
        assert_eq!(f64_to_i64_truncated(1e19, 2), Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(f64_to_i64_truncated(-1e19, 2), Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(f64_to_i64_truncated(0.99, 2), Ok(0));
    }

    #[test]
    fn boxing_rejects_inexact_integers() {
        assert_eq!(i64_to_f64_checked(-9_007_199_254_740_991, ()), Ok(-9_007_199_254_740_991.0));
        assert_eq!(i64_to_f64_checked(1 << 53, ()), Ok(9_007_199_254_740_992.0));
        assert_eq!(i64_to_f64_checked(i64::MIN, ()), Ok(-9_223_372_036_854_775_808.0));
        assert_eq!(i64_to_f64_checked(i64::MAX, ()), Err(()));
        assert_eq!(i64_to_f64_checked((1 << 53) + 1, ()), Err(()));
    }
}
