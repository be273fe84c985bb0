use crate::{
    ast::{BinaryOperator, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{checked_pow, truncated_negative_pow},
};

impl Context {
    /// Evaluates an integer exponentiation exactly.
    ///
    /// Non-negative exponents use checked arithmetic, so overflow is detected
    /// at the exact `i64` boundary. Negative exponents produce the floating
    /// result truncated toward zero, which is only non-zero for bases `1` and
    /// `-1`.
    ///
    /// # Errors
    /// `RuntimeError::IntegerOverflow` when the power does not fit, and
    /// `RuntimeError::DivisionByZero` for zero raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use mint::{ast::LiteralValue, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_integer_pow(2, 10, 1).unwrap(), LiteralValue::Integer(1024));
    /// assert_eq!(Context::eval_integer_pow(2, -1, 1).unwrap(), LiteralValue::Integer(0));
    /// assert!(Context::eval_integer_pow(2, 64, 1).is_err());
    /// ```
    pub fn eval_integer_pow(base: i64, exponent: i64, line: usize) -> EvalResult<LiteralValue> {
        let result = if exponent >= 0 {
            checked_pow(base, exponent.unsigned_abs()).ok_or(RuntimeError::IntegerOverflow {
                op: BinaryOperator::Exp,
                left: base,
                right: exponent,
                line,
            })?
        } else {
            truncated_negative_pow(base, exponent.unsigned_abs())
                .ok_or(RuntimeError::DivisionByZero { line })?
        };
        Ok(LiteralValue::Integer(result))
    }
}
