use crate::{
    ast::{BinaryOperator, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates an arithmetic operation on two numeric literals.
    ///
    /// The result is a float if either operand is a float, otherwise an
    /// integer. Integer results are checked against the `i64` range, and an
    /// integer division that leaves a remainder is promoted to a float.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::IntegerOverflow` when an integer result does not fit,
    /// and `RuntimeError::DivisionByZero` for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use mint::{
    ///     ast::{BinaryOperator, LiteralValue},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let whole = Context::eval_scalar_op(BinaryOperator::Div, 6_i64.into(), 3_i64.into(), 1).unwrap();
    /// assert_eq!(whole, LiteralValue::Integer(2));
    ///
    /// let promoted = Context::eval_scalar_op(BinaryOperator::Div, 7_i64.into(), 2_i64.into(), 1).unwrap();
    /// assert_eq!(promoted, LiteralValue::Float(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: LiteralValue,
                          right: LiteralValue,
                          line: usize)
                          -> EvalResult<LiteralValue> {
        use LiteralValue::{Float, Integer};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, a, b, line),
            (Float(a), Float(b)) => Self::eval_float_op(op, a, b, line),
            (Integer(a), Float(b)) => Self::eval_float_op(op, i64_to_f64(a), b, line),
            (Float(a), Integer(b)) => Self::eval_float_op(op, a, i64_to_f64(b), line),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<LiteralValue> {
        use BinaryOperator::{Add, Div, Exp, Mult, Sub};

        let overflow = || RuntimeError::IntegerOverflow { op,
                                                          left: a,
                                                          right: b,
                                                          line };
        match op {
            Add => a.checked_add(b).map(LiteralValue::Integer).ok_or_else(overflow),
            Sub => a.checked_sub(b).map(LiteralValue::Integer).ok_or_else(overflow),
            Mult => a.checked_mul(b).map(LiteralValue::Integer).ok_or_else(overflow),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                let quotient = a.checked_div(b).ok_or_else(overflow)?;
                if a % b == 0 {
                    Ok(LiteralValue::Integer(quotient))
                } else {
                    Ok(LiteralValue::Float(i64_to_f64(a) / i64_to_f64(b)))
                }
            },
            Exp => Self::eval_integer_pow(a, b, line),
        }
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<LiteralValue> {
        use BinaryOperator::{Add, Div, Exp, Mult, Sub};

        Ok(LiteralValue::Float(match op {
                                   Add => a + b,
                                   Sub => a - b,
                                   Mult => a * b,
                                   Div => {
                                       if b == 0.0 {
                                           return Err(RuntimeError::DivisionByZero { line });
                                       }
                                       a / b
                                   },
                                   Exp => a.powf(b),
                               }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: BinaryOperator, a: LiteralValue, b: LiteralValue) -> EvalResult<LiteralValue> {
        Context::eval_scalar_op(op, a, b, 1)
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(op(BinaryOperator::Add, 1_i64.into(), 0.5.into()), Ok(LiteralValue::Float(1.5)));
        assert_eq!(op(BinaryOperator::Mult, 0.5.into(), 4_i64.into()), Ok(LiteralValue::Float(2.0)));
    }

    #[test]
    fn integer_overflow_is_detected() {
        assert_eq!(op(BinaryOperator::Add, i64::MAX.into(), 1_i64.into()),
                   Err(RuntimeError::IntegerOverflow { op:    BinaryOperator::Add,
                                                       left:  i64::MAX,
                                                       right: 1,
                                                       line:  1, }));
        assert!(op(BinaryOperator::Sub, i64::MIN.into(), 1_i64.into()).is_err());
        assert!(op(BinaryOperator::Mult, (i64::MAX / 2 + 1).into(), 2_i64.into()).is_err());
        assert!(op(BinaryOperator::Div, i64::MIN.into(), (-1_i64).into()).is_err());
    }

    #[test]
    fn division_by_zero_is_error_for_both_types() {
        assert_eq!(op(BinaryOperator::Div, 1_i64.into(), 0_i64.into()),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(op(BinaryOperator::Div, 1.5.into(), 0.0.into()),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(op(BinaryOperator::Div, 1.5.into(), 0_i64.into()),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
    }

    #[test]
    fn negative_integer_division_with_remainder_is_float() {
        assert_eq!(op(BinaryOperator::Div, (-7_i64).into(), 2_i64.into()), Ok(LiteralValue::Float(-3.5)));
        assert_eq!(op(BinaryOperator::Div, (-8_i64).into(), 2_i64.into()), Ok(LiteralValue::Integer(-4)));
    }
}
