/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the statement and expression entry points
/// and the `Outcome` of evaluating a statement.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements arithmetic on numeric operands, including numeric promotion,
/// overflow detection and division by zero.
pub mod binary;

/// Definition-time constant folding.
///
/// Reduces literal-only subtrees of a function body while leaving identifiers
/// and applications for call time.
pub mod fold;

/// Function definition and application.
///
/// Installs user-defined functions and applies them with parameters bound in
/// a temporary scope.
pub mod function;
