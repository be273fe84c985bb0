use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier has no binding, or only a parameter placeholder.
    UnboundIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two parameters of one definition share a name, or a parameter shares
    /// the name of the function it belongs to.
    DuplicateParameter {
        /// The function being defined.
        function:  String,
        /// The repeated parameter name.
        parameter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function was applied to the wrong number of arguments.
    ArityMismatch {
        /// The function being applied.
        function: String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer arithmetic left the signed 64-bit range.
    IntegerOverflow {
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// Left operand.
        left:  i64,
        /// Right operand.
        right: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero (integer or float), or a zero base raised
    /// to a negative integer power.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric operand was required, but a function value was found.
    ExpectedNumber {
        /// Rendering of the offending value.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The callee of an application is bound to something other than a
    /// function.
    NotAFunction {
        /// The name used as callee.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested applications exceeded the configured depth.
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Scope bookkeeping went out of sync. Never expected in practice.
    InternalInvariantViolation {
        /// What went wrong.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundIdentifier { name, line } => {
                write!(f, "Error on line {line}: Unbound identifier '{name}'.")
            },
            Self::DuplicateParameter { function,
                                       parameter,
                                       line, } => write!(f,
                                                         "Error on line {line}: Duplicate parameter '{parameter}' in {function}."),
            Self::ArityMismatch { function,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: In application of {function}: received {found} arguments, expected {expected}."),
            Self::IntegerOverflow { op,
                                    left,
                                    right,
                                    line, } => write!(f,
                                                      "Error on line {line}: Integer overflow while computing {left} {op} {right}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected number, found {found}.")
            },
            Self::NotAFunction { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Recursion limit of {limit} nested applications exceeded."),
            Self::InternalInvariantViolation { details } => {
                write!(f, "Internal error: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
