use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
};

/// Represents a runtime value in the interpreter.
///
/// Values are what bindings hold and what evaluation produces. Function values
/// share their definition through an `Rc`, so reading a function binding never
/// copies its body.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A user-defined function, with its body folded at definition time.
    Function(Rc<FunctionDef>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(lit: LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Float(x) => Self::Float(x),
        }
    }
}

impl Value {
    /// Returns the numeric literal this value corresponds to, if any.
    #[must_use]
    pub const fn as_literal(&self) -> Option<LiteralValue> {
        match self {
            Self::Integer(n) => Some(LiteralValue::Integer(*n)),
            Self::Float(x) => Some(LiteralValue::Float(*x)),
            Self::Function(_) => None,
        }
    }

    /// Builds the error reported when `self` is used where a number belongs.
    pub(crate) fn expected_number(&self, line: usize) -> RuntimeError {
        RuntimeError::ExpectedNumber { found: self.to_string(),
                                       line }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "(Int {n})"),
            Self::Float(x) => write!(f, "(Float {x:.6})"),
            Self::Function(def) => write!(f, "{def}"),
        }
    }
}
