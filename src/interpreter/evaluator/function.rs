use std::{collections::HashSet, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::ScopeMark,
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a function definition and installs it.
    ///
    /// The body is constant-folded first, then the parameter list is checked.
    /// The resulting function value is bound under the function's own name,
    /// replacing an existing binding of that name, so the body may refer to
    /// the function itself.
    ///
    /// # Errors
    /// Arithmetic errors from folding, or `RuntimeError::DuplicateParameter`.
    pub(crate) fn define_function(&mut self, def: FunctionDef) -> EvalResult<Rc<FunctionDef>> {
        let FunctionDef { name,
                          params,
                          body,
                          line, } = def;

        let body = Self::fold_constants(body)?;
        validate_parameters(&name, &params, line)?;

        let function = Rc::new(FunctionDef { name,
                                             params,
                                             body,
                                             line });
        debug!(name = %function.name, arity = function.params.len(), "installing function");
        self.assign(&function.name, Value::Function(Rc::clone(&function)));

        Ok(function)
    }

    /// Applies a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's environment.
    /// One placeholder per parameter is then pushed, the argument values are
    /// bound into them, and the body is evaluated. Bindings pushed for the
    /// call are always removed again, including when binding or the body
    /// fails.
    ///
    /// # Errors
    /// - `RuntimeError::NotAFunction` if `name` is bound to a number.
    /// - `RuntimeError::ArityMismatch` if argument and parameter counts differ.
    /// - `RuntimeError::RecursionLimit` once applications nest too deeply.
    /// - Any error raised by an argument or by the body.
    pub(crate) fn eval_application(&mut self,
                                   name: &str,
                                   arguments: &[Expr],
                                   line: usize)
                                   -> EvalResult<Value> {
        let function = match self.environment.lookup(name, line)? {
            Value::Function(function) => function,
            _ => {
                return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                        line });
            },
        };

        let values = arguments.iter()
                              .map(|arg| self.eval_expr(arg))
                              .collect::<EvalResult<Vec<_>>>()?;

        let limit = self.config.recursion_limit;
        if self.depth >= limit {
            debug!(name, limit, "recursion limit reached");
            return Err(RuntimeError::RecursionLimit { limit, line });
        }

        let mark = self.push_params(&function.params);
        trace!(name, depth = self.depth, "pushed call scope");

        let result = self.bind_and_run(&function, values, mark, line);
        let popped = self.pop_params(mark);
        trace!(name, depth = self.depth, "popped call scope");

        let value = result?;
        popped?;
        Ok(value)
    }

    /// Pushes one placeholder per parameter and returns the mark to pop to.
    fn push_params(&mut self, params: &[String]) -> ScopeMark {
        let mark = self.environment.mark();
        for param in params {
            self.environment.push_temporary(param);
        }
        mark
    }

    /// Removes every binding pushed for a call.
    fn pop_params(&mut self, mark: ScopeMark) -> EvalResult<()> {
        self.environment.restore(mark)
    }

    /// Binds argument values into the placeholders above `mark`.
    ///
    /// Binds as many pairs as both lists allow and returns that count.
    fn bind_args(&mut self, mark: ScopeMark, params: &[String], values: Vec<Value>) -> EvalResult<usize> {
        let mut bound = 0;
        for (index, value) in values.into_iter().take(params.len()).enumerate() {
            self.environment.bind(mark, index, value)?;
            bound += 1;
        }
        Ok(bound)
    }

    fn bind_and_run(&mut self,
                    function: &FunctionDef,
                    values: Vec<Value>,
                    mark: ScopeMark,
                    line: usize)
                    -> EvalResult<Value> {
        let found = values.len();
        let bound = self.bind_args(mark, &function.params, values)?;
        if bound != function.params.len() || found != bound {
            return Err(RuntimeError::ArityMismatch { function: function.name.clone(),
                                                     expected: function.params.len(),
                                                     found,
                                                     line });
        }

        self.depth += 1;
        let result = self.eval_expr(&function.body);
        self.depth -= 1;
        result
    }
}

/// Ensures that no two parameters share a name, and that no parameter shares
/// the function's own name.
///
/// # Parameters
/// - `function`: Name of the function being defined.
/// - `params`: Its parameter names.
/// - `line`: Line number for error reporting.
fn validate_parameters(function: &str, params: &[String], line: usize) -> EvalResult<()> {
    let mut seen = HashSet::new();
    for param in params {
        if param == function || !seen.insert(param.as_str()) {
            return Err(RuntimeError::DuplicateParameter { function: function.to_string(),
                                                          parameter: param.clone(),
                                                          line });
        }
    }
    Ok(())
}
