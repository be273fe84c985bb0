/// Numeric conversion and exact integer power helpers.
///
/// This module provides the integer/float conversion used for numeric
/// promotion, and exact replacements for the floating-point power used on
/// integer operands, so that overflow is detected precisely rather than
/// estimated.
pub mod num;
