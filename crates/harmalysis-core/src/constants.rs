//! Notation tables and mappings

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Roman numeral labels (uppercase for major, lowercase for minor)
pub const UPPER_CASE_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
pub const LOWER_CASE_NUMERALS: [&str; 7] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Roman numeral text to scale-degree number, both cases
pub static ROMAN_DEGREES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (index, numeral) in UPPER_CASE_NUMERALS.iter().enumerate() {
        map.insert(*numeral, (index + 1) as u8);
    }
    for (index, numeral) in LOWER_CASE_NUMERALS.iter().enumerate() {
        map.insert(*numeral, (index + 1) as u8);
    }
    map
});

/// Figured-bass token to inversion index
pub static FIGURED_BASS_INVERSIONS: Lazy<HashMap<u16, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(6, 1); // Triad, first inversion
    map.insert(64, 2); // Triad, second inversion
    map.insert(65, 1); // Seventh chord, first inversion
    map.insert(43, 2); // Seventh chord, second inversion
    map.insert(42, 3); // Seventh chord, third inversion
    map.insert(2, 3); // Shorthand for 42
    map
});

/// Inversion letters; the ordinal position is the inversion index
pub const INVERSION_LETTERS: [char; 7] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];
