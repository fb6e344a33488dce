//! Data layer - static transliteration tables
//!
//! Everything here is compiled into the binary; there is no runtime
//! configuration of the symbol set.

pub mod symbols;

pub use symbols::{uppercase_of, vowel_variant_count, CONSONANTS, UPPERCASE, VOWELS};
