use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two runtime values.
    ///
    /// Both operands must be numeric; a function value on either side is
    /// reported as `ExpectedNumber`. The arithmetic itself is shared with
    /// definition-time folding through [`Context::eval_scalar_op`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use mint::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        let l = left.as_literal()
                    .ok_or_else(|| left.expected_number(line))?;
        let r = right.as_literal()
                     .ok_or_else(|| right.expected_number(line))?;

        Ok(Self::eval_scalar_op(op, l, r, line)?.into())
    }
}
