// 📅 Date Numbers - Life Path & Personal Cycles
// Every number derived from calendar components (year, month, day as plain ints)

use crate::reduction::{digit_sum, reduce};

// ============================================================================
// BIRTH DATE NUMBERS
// ============================================================================

/// Life Path Number - the most important number in numerology.
///
/// Two-stage method: reduce each component separately, THEN reduce the sum.
/// This preserves master numbers that appear at the component stage
/// (e.g. a day of 29 contributes 11, not 2) and is NOT equivalent to
/// reducing the raw digit sums in one pass. Do not "simplify" it.
pub fn life_path_number(year: u32, month: u32, day: u32) -> u32 {
    let y = reduce(digit_sum(year));
    let m = reduce(digit_sum(month));
    let d = reduce(digit_sum(day));
    reduce(y + m + d)
}

/// Birthday Number - natural talents, from just the day of birth.
pub fn birthday_number(day: u32) -> u32 {
    reduce(day)
}

// ============================================================================
// PERSONAL CYCLE NUMBERS
// ============================================================================

/// Personal Year Number - the theme of a given calendar year.
/// Birth month + birth day + target year, each reduced before summing.
pub fn personal_year(birth_month: u32, birth_day: u32, target_year: u32) -> u32 {
    let m = reduce(digit_sum(birth_month));
    let d = reduce(digit_sum(birth_day));
    let y = reduce(digit_sum(target_year));
    reduce(m + d + y)
}

/// Personal Month Number - monthly energy.
/// Personal Year + target calendar month.
pub fn personal_month(
    birth_month: u32,
    birth_day: u32,
    target_year: u32,
    target_month: u32,
) -> u32 {
    let py = personal_year(birth_month, birth_day, target_year);
    let tm = reduce(digit_sum(target_month));
    reduce(py + tm)
}

/// Personal Day Number - the day's personal energy.
/// Personal Month + target calendar day.
pub fn personal_day(
    birth_month: u32,
    birth_day: u32,
    target_year: u32,
    target_month: u32,
    target_day: u32,
) -> u32 {
    let pm = personal_month(birth_month, birth_day, target_year, target_month);
    let td = reduce(digit_sum(target_day));
    reduce(pm + td)
}

/// Universal Day Number - collective energy shared by everyone on a date.
///
/// Single-stage: the raw digit sums are added and reduced once. The
/// asymmetry with [`life_path_number`]'s two-stage form is intentional
/// numerological convention, not an inconsistency to fix.
pub fn universal_day(year: u32, month: u32, day: u32) -> u32 {
    reduce(digit_sum(year) + digit_sum(month) + digit_sum(day))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduction::is_master_number;

    #[test]
    fn test_life_path_worked_example() {
        // 1990 → 19 → 1; 6 → 6; 15 → 6; 1+6+6 = 13 → 4
        assert_eq!(life_path_number(1990, 6, 15), 4);
    }

    #[test]
    fn test_life_path_with_master_components() {
        // year 1984 digit-sums to 22 (master, kept); day 29 → 11 (master, kept)
        // 22 + 3 + 11 = 36 → 9
        assert_eq!(life_path_number(1984, 3, 29), 9);
    }

    #[test]
    fn test_life_path_two_stage_differs_from_single_stage() {
        // 2999 digit-sums to 29, which reduces to the master 11.
        // Two-stage: 11 + 3 + 8 = 22 (master, preserved).
        // Single-stage would be reduce(29 + 3 + 8) = reduce(40) = 4.
        assert_eq!(life_path_number(2999, 3, 8), 22);
        assert_eq!(universal_day(2999, 3, 8), 4);
    }

    #[test]
    fn test_birthday_number() {
        assert_eq!(birthday_number(7), 7);
        assert_eq!(birthday_number(15), 6);
        assert_eq!(birthday_number(29), 11); // 29 → 11, master halts
        assert_eq!(birthday_number(22), 22);
    }

    #[test]
    fn test_universal_day_worked_example() {
        // digit_sum(2026)=10, +1, +1 = 12 → 3
        assert_eq!(universal_day(2026, 1, 1), 3);
    }

    #[test]
    fn test_personal_year() {
        // birth 6/15 in 2026: 6 + 6 + reduce(10)=1 → 13 → 4
        assert_eq!(personal_year(6, 15, 2026), 4);
    }

    #[test]
    fn test_personal_month_builds_on_personal_year() {
        // PY 4 + reduce(8)=8 → 12 → 3
        assert_eq!(personal_month(6, 15, 2026, 8), 3);
    }

    #[test]
    fn test_personal_day_builds_on_personal_month() {
        // PM 3 + reduce(29)=11 → 14 → 5
        assert_eq!(personal_day(6, 15, 2026, 8, 29), 5);
    }

    #[test]
    fn test_all_outputs_in_valid_set() {
        for day in 1..=31 {
            for month in 1..=12 {
                let lp = life_path_number(1987, month, day);
                assert!((1..=9).contains(&lp) || is_master_number(lp));
                let ud = universal_day(2026, month, day);
                assert!((1..=9).contains(&ud) || is_master_number(ud));
                let pd = personal_day(month, day, 2026, month, day);
                assert!((1..=9).contains(&pd) || is_master_number(pd));
            }
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(life_path_number(1990, 6, 15), life_path_number(1990, 6, 15));
        assert_eq!(
            personal_day(6, 15, 2026, 8, 29),
            personal_day(6, 15, 2026, 8, 29)
        );
    }

    #[test]
    fn test_inputs_are_trusted_not_validated() {
        // month 13 is nonsense but still produces a well-defined reduction
        let n = life_path_number(2000, 13, 32);
        assert!((1..=9).contains(&n) || is_master_number(n));
    }
}
