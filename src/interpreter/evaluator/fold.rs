use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Folds literal-only subexpressions of a function body.
    ///
    /// Identifiers are left untouched, since parameters have no values at
    /// definition time, and so is every binary operation with a non-literal
    /// side. Applications keep their callee and only have their arguments
    /// folded; they run when the enclosing function is applied.
    ///
    /// # Errors
    /// Any arithmetic error raised by a literal-only subexpression, such as
    /// `1 / 0` or an integer overflow.
    ///
    /// # Example
    /// ```
    /// use mint::interpreter::{evaluator::core::Context, lexer::tokenize, parser::parse};
    /// use mint::ast::Statement;
    ///
    /// let tokens = tokenize("x * (2 + 3) - 1", 1).unwrap();
    /// let Some(Statement::Expression { expr, .. }) = parse(&tokens).unwrap() else {
    ///     unreachable!()
    /// };
    ///
    /// let folded = Context::fold_constants(expr).unwrap();
    /// assert_eq!(folded.to_string(), "(Sub(Mult(ID x)(Int 5))(Int 1))");
    /// ```
    pub fn fold_constants(expr: Expr) -> EvalResult<Expr> {
        match expr {
            Expr::Literal { .. } | Expr::Identifier { .. } => Ok(expr),
            Expr::BinaryOp { left, op, right, line } => {
                let left = Self::fold_constants(*left)?;
                let right = Self::fold_constants(*right)?;

                match (left.as_literal(), right.as_literal()) {
                    (Some(l), Some(r)) => {
                        Ok(Expr::Literal { value: Self::eval_scalar_op(op, l, r, line)?,
                                           line })
                    },
                    _ => Ok(Expr::BinaryOp { left: Box::new(left),
                                             op,
                                             right: Box::new(right),
                                             line }),
                }
            },
            Expr::Application { name,
                                arguments,
                                line, } => {
                let arguments = arguments.into_iter()
                                         .map(Self::fold_constants)
                                         .collect::<EvalResult<Vec<_>>>()?;
                Ok(Expr::Application { name,
                                       arguments,
                                       line })
            },
        }
    }
}
