use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What evaluating one statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line held no statement, only a comment or nothing.
    Empty,
    /// An expression reduced to a value.
    Value(Value),
    /// An assignment; keeps the `(name, value)` shape for display.
    Assigned {
        /// The bound name.
        name:  String,
        /// The value it now holds.
        value: Value,
    },
    /// A function definition, as installed.
    Defined(Rc<FunctionDef>),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Value(value) => write!(f, "{value}"),
            Self::Assigned { name, value } => write!(f, "(Assign(ID {name}){value})"),
            Self::Defined(def) => write!(f, "{def}"),
        }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the environment of bindings, the
/// configuration and the current application depth.
///
/// ## Usage
///
/// `Context` is created once and reused for every statement of a session, so
/// bindings made by one line are visible to the next.
pub struct Context {
    /// Every binding, including functions and in-flight call parameters.
    pub environment: Environment,
    pub(crate) config: Config,
    pub(crate) depth:  usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty environment and the
    /// default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self { environment: Environment::new(),
               config,
               depth: 0 }
    }

    /// The configuration this context was created with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and function definitions mutate the environment; a bare
    /// expression leaves it unchanged. If evaluation fails, nothing is bound.
    ///
    /// # Example
    /// ```
    /// use mint::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::parse, value::Value,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.environment.extend("r", Value::Integer(15));
    ///
    /// let tokens = tokenize("circumference = 3.14 * 2 * r", 1).unwrap();
    /// let statement = parse(&tokens).unwrap().unwrap();
    /// let outcome = context.eval_statement(statement).unwrap();
    ///
    /// assert_eq!(outcome.to_string(), "(Assign(ID circumference)(Float 94.200000))");
    /// assert_eq!(context.environment.to_string(),
    ///            "[(circumference : (Float 94.200000)), (r : (Int 15))]");
    /// ```
    pub fn eval_statement(&mut self, statement: Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Function(def) => Ok(Outcome::Defined(self.define_function(def)?)),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval_expr(&value)?;
                self.assign(&name, value.clone());
                Ok(Outcome::Assigned { name, value })
            },
            Statement::Expression { expr, .. } => Ok(Outcome::Value(self.eval_expr(&expr)?)),
        }
    }

    /// Evaluates an expression fully and returns the resulting value.
    ///
    /// Every identifier must be bound. Literals evaluate to themselves.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok((*value).into()),
            Expr::Identifier { name, line } => self.environment.lookup(name, *line),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Application { name,
                                arguments,
                                line, } => self.eval_application(name, arguments, *line),
        }
    }

    /// Updates the most recent binding for `name`, or creates one.
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        if let Err(value) = self.environment.update(name, value) {
            self.environment.extend(name, value);
        }
    }
}
