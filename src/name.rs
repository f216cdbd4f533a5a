// ✍️ Name Numbers - Pythagorean Letter Mapping
// Expression, Soul Urge and Personality numbers from a person's name

use serde::{Deserialize, Serialize};

use crate::reduction::reduce;

// ============================================================================
// NAME NUMBERS
// ============================================================================

/// The three numbers derived from a name.
///
/// - `expression`: all letters (Destiny/Expression number)
/// - `soul_urge`: vowels only (Heart's Desire)
/// - `personality`: consonants only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameNumbers {
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

// ============================================================================
// LETTER VALUES (Pythagorean system)
// ============================================================================

/// Letter → value in the repeating 1-9 Pythagorean cycle
fn letter_value(c: char) -> u32 {
    match c {
        'a' | 'j' | 's' => 1,
        'b' | 'k' | 't' => 2,
        'c' | 'l' | 'u' => 3,
        'd' | 'm' | 'v' => 4,
        'e' | 'n' | 'w' => 5,
        'f' | 'o' | 'x' => 6,
        'g' | 'p' | 'y' => 7,
        'h' | 'q' | 'z' => 8,
        'i' | 'r' => 9,
        _ => 0,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

// ============================================================================
// NAME → NUMBERS
// ============================================================================

/// Map a name to its Expression, Soul Urge and Personality numbers.
///
/// The name is lowercased and everything outside ASCII a-z is discarded.
/// Letters with diacritics (e.g. Lithuanian ą, ž) are dropped, not
/// transliterated - a deliberate policy, so "José" counts j, o, s only.
///
/// A name with no vowels yields `soul_urge == 0`; a name with no usable
/// letters at all yields all three numbers as 0. Neither is an error.
pub fn name_to_numbers(name: &str) -> NameNumbers {
    let mut all_sum = 0;
    let mut vowel_sum = 0;
    let mut consonant_sum = 0;

    for ch in name.to_lowercase().chars().filter(char::is_ascii_lowercase) {
        let val = letter_value(ch);
        all_sum += val;
        if is_vowel(ch) {
            vowel_sum += val;
        } else {
            consonant_sum += val;
        }
    }

    NameNumbers {
        expression: reduce(all_sum),
        soul_urge: reduce(vowel_sum),
        personality: reduce(consonant_sum),
    }
}

// ============================================================================
// TESTS
// ============================================================================
