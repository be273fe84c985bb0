/// Binary operation dispatch on runtime values.
///
/// Checks that both operands are numeric and routes to scalar arithmetic.
pub mod core;

/// Arithmetic on two numeric scalars.
///
/// Dispatches on the operand types, promotes mixed operands to float and
/// checks integer results against the `i64` range.
pub mod scalar;

/// Exponentiation.
///
/// Exact integer powers and floating-point powers for mixed operands.
pub mod power;
