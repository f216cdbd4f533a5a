// 📖 Meaning Tables - Number → Short Meaning, Per Locale
// Static lookup tables for 1-9 plus the master numbers, English and Lithuanian

use serde::{Deserialize, Serialize};

// ============================================================================
// LOCALE
// ============================================================================

/// Supported meaning-table locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Lt,
}

impl Locale {
    /// Two-letter language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Lt => "lt",
        }
    }

    /// Resolve a subscriber language code; anything that isn't "lt" is English
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("lt") {
            Locale::Lt
        } else {
            Locale::En
        }
    }

    fn table(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::En => &MEANINGS_EN,
            Locale::Lt => &MEANINGS_LT,
        }
    }
}

// ============================================================================
// MEANING TABLES
// ============================================================================

/// The complete meaning key set: 1-9 plus the master numbers.
/// Both locale tables are indexed by position in this array, so they
/// cover the identical key set by construction.
pub const MEANING_KEYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

const MEANINGS_EN: [&str; 12] = [
    "New beginnings, initiative",
    "Partnership, balance",
    "Creativity, expression",
    "Structure, discipline",
    "Change, freedom",
    "Harmony, responsibility",
    "Reflection, inner wisdom",
    "Power, abundance",
    "Completion, compassion",
    "Intuition, spiritual insight",
    "Master Builder, big vision",
    "Master Teacher, healing",
];

const MEANINGS_LT: [&str; 12] = [
    "Nauja pradžia, iniciatyva",
    "Partnerystė, pusiausvyra",
    "Kūrybiškumas, išraiška",
    "Struktūra, disciplina",
    "Pokyčiai, laisvė",
    "Harmonija, atsakomybė",
    "Apmąstymai, vidinė išmintis",
    "Galia, gausa",
    "Užbaigimas, atjauta",
    "Intuicija, dvasinis įžvalgumas",
    "Didysis Statytojas, didelė vizija",
    "Didysis Mokytojas, gydymas",
];

// ============================================================================
// LOOKUP
// ============================================================================

/// Error for a lookup key outside {1..9, 11, 22, 33}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownNumberError {
    pub number: u32,
}

impl std::fmt::Display for UnknownNumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no numerology meaning for {}: expected 1-9 or a master number (11, 22, 33)",
            self.number
        )
    }
}

impl std::error::Error for UnknownNumberError {}

/// Look up the short meaning text for a numerology number.
///
/// Values that flowed through `reduce` always hit the table, with one
/// exception: the degenerate 0 produced by an empty-after-filter name,
/// which (like any other out-of-set key) is an `UnknownNumberError`.
pub fn meaning_for(number: u32, locale: Locale) -> Result<&'static str, UnknownNumberError> {
    MEANING_KEYS
        .iter()
        .position(|&k| k == number)
        .map(|idx| locale.table()[idx])
        .ok_or(UnknownNumberError { number })
}

// ============================================================================
// TESTS
// ============================================================================
