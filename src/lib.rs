// Numerology Engine - Core Library
// Pure, stateless numerology calculators + meaning tables for two locales

pub mod reduction;
pub mod name;
pub mod dates;
pub mod profile;
pub mod meanings;

// Re-export commonly used types and functions
pub use reduction::{digit_sum, is_master_number, reduce, MASTER_NUMBERS};
pub use name::{name_to_numbers, NameNumbers};
pub use dates::{
    birthday_number, life_path_number, personal_day, personal_month, personal_year, universal_day,
};
pub use profile::{birth_profile, daily_numbers, DailyNumbers, NumerologyProfile};
pub use meanings::{meaning_for, Locale, UnknownNumberError, MEANING_KEYS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
