// 🔢 Reduction Primitives - Digit Sums & Master Numbers
// Core arithmetic every other numerology number is built from

use std::fmt::Display;

// ============================================================================
// MASTER NUMBERS
// ============================================================================

/// The three master numbers - conventionally never reduced further
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Check whether a value is one of the master numbers (11, 22, 33)
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

// ============================================================================
// REDUCTION
// ============================================================================

/// Reduce to a single digit, or stop at a master number.
///
/// Repeatedly sums decimal digits until the value is 9 or less.
/// Master membership is checked on EVERY iteration: an intermediate
/// 11, 22 or 33 halts reduction even though it is still two digits.
///
/// `reduce(0)` is 0 - the loop never runs for it.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

/// Sum the decimal digits of a value's string form.
///
/// Works on anything printable - integers and numeral strings alike.
/// Non-digit characters (signs, separators) are ignored.
///
/// # Examples
/// ```
/// use numerology_engine::digit_sum;
/// assert_eq!(digit_sum(2026), 10);
/// assert_eq!(digit_sum("1990"), 19);
/// ```
pub fn digit_sum(value: impl Display) -> u32 {
    value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_single_digits_are_fixpoints() {
        for n in 1..=9 {
            assert_eq!(reduce(n), n);
        }
    }

    #[test]
    fn test_reduce_master_numbers_never_decompose() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
    }

    #[test]
    fn test_reduce_zero_is_degenerate_not_infinite() {
        assert_eq!(reduce(0), 0);
    }

    #[test]
    fn test_reduce_examples() {
        assert_eq!(reduce(19), 1); // 19 → 10 → 1
        assert_eq!(reduce(13), 4);
        assert_eq!(reduce(29), 11); // 29 → 11, master halts
        assert_eq!(reduce(40), 4);
        assert_eq!(reduce(1990), 1); // 1990 → 19 → 10 → 1
    }

    #[test]
    fn test_reduce_range_stays_in_valid_set() {
        for n in 1..=10_000u32 {
            let r = reduce(n);
            assert!(
                (1..=9).contains(&r) || is_master_number(r),
                "reduce({}) produced {}",
                n,
                r
            );
        }
    }

    #[test]
    fn test_reduce_is_idempotent() {
        for n in 1..=10_000u32 {
            let r = reduce(n);
            assert_eq!(reduce(r), r);
        }
    }

    #[test]
    fn test_digit_sum_of_string() {
        assert_eq!(digit_sum("1990"), 19);
        assert_eq!(digit_sum("0"), 0);
    }

    #[test]
    fn test_digit_sum_of_integer() {
        assert_eq!(digit_sum(2026), 10);
        assert_eq!(digit_sum(7), 7);
    }

    #[test]
    fn test_digit_sum_ignores_non_digits() {
        assert_eq!(digit_sum("-42"), 6);
        assert_eq!(digit_sum("1,990"), 19);
        assert_eq!(digit_sum("no digits"), 0);
    }

    #[test]
    fn test_is_master_number() {
        assert!(is_master_number(11));
        assert!(is_master_number(22));
        assert!(is_master_number(33));
        assert!(!is_master_number(2));
        assert!(!is_master_number(44));
    }
}
