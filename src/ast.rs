use std::fmt::{self, Display, Formatter};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw numeric constants that can appear directly in
/// source code. It is used in the AST to represent literal expressions and as
/// the result of constant folding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node exclusively owns its children, so a parsed expression is a
/// strict tree. Argument lists are stored as vectors; they are rendered in the
/// right-nested `(Arg ..)` form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the identifier.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Application of a named function (e.g. `f(1, x)`).
    Application {
        /// Name of the function being applied.
        name:      String,
        /// Argument expressions, at least one.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mint::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Application { line, .. } => *line,
        }
    }

    /// Returns the literal value if `self` is a numeric literal.
    #[must_use]
    pub const fn as_literal(&self) -> Option<LiteralValue> {
        match self {
            Self::Literal { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Represents a user-defined function definition.
///
/// `fn name(p1, p2, ...) = body`. The parameter list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is applied.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a top-level statement, one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A function definition.
    Function(FunctionDef),
    /// An assignment binding a name to the value of an expression.
    Assignment {
        /// The name being bound.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mult,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Exp,
}

impl BinaryOperator {
    /// The tag used when rendering trees, e.g. `Mult` in `(Mult(Int 5)(ID f))`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mult => "Mult",
            Self::Div => "Div",
            Self::Exp => "Exp",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Exp => "^",
        };
        write!(f, "{operator}")
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "(Int {n})"),
            Self::Float(x) => write!(f, "(Float {x:.6})"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "(ID {name})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({}{left}{right})", op.tag()),
            Self::Application { name, arguments, .. } => {
                write!(f, "(App(ID {name})")?;
                write_arguments(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(Fun {} ", self.name)?;
        write_parameters(f, &self.params)?;
        write!(f, "{})", self.body)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(def) => write!(f, "{def}"),
            Self::Assignment { name, value, .. } => write!(f, "(Assign(ID {name}){value})"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

/// Writes a parameter list in its right-nested form:
/// `(Param(ID x)(Param(ID y)()))`.
fn write_parameters(f: &mut Formatter<'_>, params: &[String]) -> fmt::Result {
    match params.split_first() {
        Some((first, rest)) => {
            write!(f, "(Param(ID {first})")?;
            write_parameters(f, rest)?;
            write!(f, ")")
        },
        None => write!(f, "()"),
    }
}

/// Writes an argument list in its right-nested form:
/// `(Arg(Int 1)(Arg(ID x)()))`.
fn write_arguments(f: &mut Formatter<'_>, arguments: &[Expr]) -> fmt::Result {
    match arguments.split_first() {
        Some((first, rest)) => {
            write!(f, "(Arg{first}")?;
            write_arguments(f, rest)?;
            write!(f, ")")
        },
        None => write!(f, "()"),
    }
}
