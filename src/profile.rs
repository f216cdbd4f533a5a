// 🧾 Aggregate Profiles - Birth Profile & Daily Numbers
// Pure composition of the name and date calculators; no new arithmetic here

use serde::{Deserialize, Serialize};

use crate::dates::{
    birthday_number, life_path_number, personal_day, personal_month, personal_year, universal_day,
};
use crate::name::name_to_numbers;

// ============================================================================
// BIRTH PROFILE
// ============================================================================

/// All fixed numbers from birth data + name.
/// Computed once per person; immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub birthday: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

/// Build the full birth profile from a name and birth date components.
pub fn birth_profile(name: &str, year: u32, month: u32, day: u32) -> NumerologyProfile {
    let name_nums = name_to_numbers(name);
    NumerologyProfile {
        life_path: life_path_number(year, month, day),
        birthday: birthday_number(day),
        expression: name_nums.expression,
        soul_urge: name_nums.soul_urge,
        personality: name_nums.personality,
    }
}

// ============================================================================
// DAILY NUMBERS
// ============================================================================

/// Cycle numbers for a specific person on a specific target date.
/// Recomputed for every date queried; the engine never caches these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNumbers {
    pub personal_day: u32,
    pub universal_day: u32,
    pub personal_month: u32,
    pub personal_year: u32,
}

/// Build the daily numbers for a birth month/day against a target date.
pub fn daily_numbers(
    birth_month: u32,
    birth_day: u32,
    target_year: u32,
    target_month: u32,
    target_day: u32,
) -> DailyNumbers {
    DailyNumbers {
        personal_day: personal_day(birth_month, birth_day, target_year, target_month, target_day),
        universal_day: universal_day(target_year, target_month, target_day),
        personal_month: personal_month(birth_month, birth_day, target_year, target_month),
        personal_year: personal_year(birth_month, birth_day, target_year),
    }
}

// ============================================================================
// TESTS
// ============================================================================
