//! Small numeric helpers.

/// Largest `n` whose factorial fits in a `u128`.
const MAX_FACTORIAL_INPUT: i64 = 34;

/// `n!` computed recursively.
///
/// Returns `None` for negative `n` and when the result does not fit in a
/// `u128` (anything above `34!`).
pub fn factorial(n: i64) -> Option<u128> {
    match n {
        n if !(0..=MAX_FACTORIAL_INPUT).contains(&n) => None,
        0 => Some(1),
        n => factorial(n - 1)?.checked_mul(n as u128),
    }
}
