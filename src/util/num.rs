/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use aslang::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, "bad"), Ok(1000));
/// assert_eq!(f64_to_i64_checked(1.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_i64_checked(f64::NAN, "bad"), Err("bad"));
/// assert_eq!(f64_to_i64_checked(1e20, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(error);
    }
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to a `usize` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Example
/// ```
/// use aslang::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, ()), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1, ()), Err(()));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Converts a length to `i64`, saturating at `i64::MAX`.
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Multiplies element counts, saturating at `usize::MAX`.
///
/// ## Example
/// ```
/// use aslang::util::num::saturating_product;
///
/// assert_eq!(saturating_product(&[2, 3, 4]), 24);
/// assert_eq!(saturating_product(&[]), 1);
/// assert_eq!(saturating_product(&[usize::MAX, 2]), usize::MAX);
/// ```
#[must_use]
pub fn saturating_product(values: &[usize]) -> usize {
    values.iter().fold(1_usize, |acc, v| acc.saturating_mul(*v))
}
