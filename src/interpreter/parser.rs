/// Core parsing entry points and the shared result type.
///
/// Contains the per-line entry point, the expression entry point and the
/// end-of-line handling shared by every statement kind.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, identifiers, parenthesized expressions and function
/// applications.
pub mod primary;

/// Statement parsing.
///
/// Distinguishes function definitions, assignments and bare expressions.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides token matching, identifier parsing and comma-separated lists.
pub mod utils;

pub use self::core::{ParseResult, parse};
