/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in absolute value are rounded, as in any mixed
/// integer/float arithmetic.
///
/// ## Example
/// ```
/// use mint::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Raises `base` to a non-negative integer power, returning `None` when the
/// result leaves the `i64` range.
///
/// Exponents beyond `u32::MAX` are only representable for bases `-1`, `0` and
/// `1`; every other base overflows.
///
/// ## Example
/// ```
/// use mint::util::num::checked_pow;
///
/// assert_eq!(checked_pow(2, 10), Some(1024));
/// assert_eq!(checked_pow(2, 63), None);
/// assert_eq!(checked_pow(-1, 5_000_000_001), Some(-1));
/// ```
#[must_use]
pub fn checked_pow(base: i64, exponent: u64) -> Option<i64> {
    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e),
        Err(_) => match base {
            0 => Some(0),
            1 => Some(1),
            -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    }
}

/// Raises `base` to a negative integer power and truncates the result toward
/// zero, the way a floating-point power cast back to an integer would.
///
/// Returns `None` for a zero base, whose negative powers are a division by
/// zero.
///
/// ## Example
/// ```
/// use mint::util::num::truncated_negative_pow;
///
/// assert_eq!(truncated_negative_pow(1, 3), Some(1));
/// assert_eq!(truncated_negative_pow(-1, 3), Some(-1));
/// assert_eq!(truncated_negative_pow(2, 1), Some(0));
/// assert_eq!(truncated_negative_pow(0, 1), None);
/// ```
#[must_use]
pub const fn truncated_negative_pow(base: i64, magnitude: u64) -> Option<i64> {
    match base {
        0 => None,
        1 => Some(1),
        -1 => Some(if magnitude % 2 == 0 { 1 } else { -1 }),
        _ => Some(0),
    }
}
