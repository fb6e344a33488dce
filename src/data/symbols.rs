//! Hebrew symbol → transliteration tables
//!
//! The tables follow the SBL academic style: spirantised consonants carry a
//! macron or underline, matres lectionis produce a circumflex, and the reduced
//! vowels (shewa and the hatephs) are written as superscript letters.
//!
//! All tables are compile-time `phf` maps. The consonant and vowel tables are
//! ordered: the board is laid out in exactly this order.

use phf::{phf_map, phf_ordered_map};

// ============================================================================
// Consonants
// ============================================================================

/// Consonants that need a diacritic in transliteration.
///
/// Letters that transliterate to plain ASCII (ל, מ, נ, ...) are not listed;
/// they can be typed directly.
pub static CONSONANTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "א" => "\u{02be}",
    "ב" => "\u{1e07}",
    "ג" => "\u{1e21}",
    "ד" => "\u{1e0f}",
    "ח" => "\u{1e25}",
    "ט" => "\u{1e6d}",
    "כ" => "\u{1e35}",
    "ע" => "\u{02bf}",
    "פ" => "p\u{0304}",
    "צ" => "\u{1e63}",
    "\u{fb2b}" => "\u{015b}", // sin
    "\u{fb2a}" => "\u{0161}", // shin
    "ת" => "\u{1e6f}",
};

// ============================================================================
// Vowels
// ============================================================================

/// Vowel signs, drawn on a dotted circle, with every accepted rendering.
///
/// Qamets is ambiguous (qamets gadol ā / qamets hatuf ŏ) and therefore gets
/// two tiles. Superscript variants are stored as inline HTML.
pub static VOWELS: phf::OrderedMap<&'static str, &'static [&'static str]> = phf_ordered_map! {
    "\u{25cc}\u{05b8}" => &["\u{0101}", "\u{014f}"],        // qamets
    "\u{25cc}\u{05b8}\u{05d4}" => &["\u{00e2}"],            // qamets he
    "\u{25cc}\u{05b6}" => &["\u{0119}"],                    // segol
    "\u{25cc}\u{05b6}\u{05d4}" => &["\u{0119}\u{0304}"],    // segol he
    "\u{25cc}\u{05b5}" => &["\u{0113}"],                    // tsere
    "\u{25cc}\u{05b5}\u{05d9}" => &["\u{00ea}"],            // tsere yod
    "\u{25cc}\u{05b4}" => &["\u{012b}"],                    // hireq
    "\u{25cc}\u{05b4}\u{05d9}" => &["\u{00ee}"],            // hireq yod
    "\u{25cc}\u{05b9}" => &["\u{014d}"],                    // holem
    "\u{25cc}\u{05d5}\u{05b9}" => &["\u{00f4}"],            // holem waw
    "\u{25cc}\u{05bb}" => &["\u{016b}"],                    // qibbuts
    "\u{25cc}\u{05d5}\u{05bc}" => &["\u{00fb}"],            // shureq
    "\u{25cc}\u{05b0}" => &["<sup>e</sup>"],                // shewa
    "\u{25cc}\u{05b3}" => &["<sup>o</sup>"],                // hateph qamets
    "\u{25cc}\u{05b2}" => &["<sup>a</sup>"],                // hateph patah
    "\u{25cc}\u{05b1}" => &["<sup>\u{0119}</sup>"],         // hateph segol
};

// ============================================================================
// Uppercase forms
// ============================================================================

/// Lowercase transliteration → uppercase transliteration.
///
/// Aleph and ayin have no case distinction and map to themselves.
pub static UPPERCASE: phf::Map<&'static str, &'static str> = phf_map! {
    "\u{02be}" => "\u{02be}",
    "\u{1e07}" => "\u{1e06}",
    "\u{1e21}" => "\u{1e20}",
    "\u{1e0f}" => "\u{1e0e}",
    "\u{1e25}" => "\u{1e24}",
    "\u{1e6d}" => "\u{1e6c}",
    "\u{1e35}" => "\u{1e34}",
    "\u{02bf}" => "\u{02bf}",
    "p\u{0304}" => "P\u{0304}",
    "\u{1e63}" => "\u{1e62}",
    "\u{015b}" => "\u{015a}",
    "\u{0161}" => "\u{0160}",
    "\u{1e6f}" => "\u{1e6e}",

    "\u{0101}" => "\u{0100}",
    "\u{014f}" => "\u{014e}",
    "\u{00e2}" => "\u{00c2}",
    "\u{0119}" => "\u{0118}",
    "\u{0119}\u{0304}" => "\u{0118}\u{0304}",
    "\u{0113}" => "\u{0112}",
    "\u{00ea}" => "\u{00ca}",
    "\u{012b}" => "\u{012a}",
    "\u{00ee}" => "\u{00ce}",
    "\u{014d}" => "\u{014c}",
    "\u{00f4}" => "\u{00d4}",
    "\u{016b}" => "\u{016a}",
    "\u{00fb}" => "\u{00db}",
    "<sup>a</sup>" => "<sup>A</sup>",
    "<sup>e</sup>" => "<sup>E</sup>",
    "<sup>o</sup>" => "<sup>O</sup>",
    "<sup>\u{0119}</sup>" => "<sup>\u{0118}</sup>",
};

/// Look up the uppercase form of a transliteration.
///
/// A miss is not an error: it means the character has no uppercase variant.
pub fn uppercase_of(transliteration: &str) -> Option<&'static str> {
    UPPERCASE.get(transliteration).copied()
}

/// Total number of vowel variants across all vowel signs
pub fn vowel_variant_count() -> usize {
    VOWELS.values().map(|variants| variants.len()).sum()
}
