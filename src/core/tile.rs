//! Tiles - one clickable cell per transliteration variant
//!
//! A tile binds a Hebrew symbol to one transliteration and its optional
//! uppercase form. Tiles are built once from the static tables, in table
//! order, and never change afterwards.

use std::fmt;

use crate::core::markup::{italic_html, plain_text};
use crate::data::symbols::{uppercase_of, vowel_variant_count, CONSONANTS, UPPERCASE, VOWELS};
use crate::utils::error::{BoardError, BoardResult};

/// Position of a tile on the board (0-based, in construction order)
pub type TileId = usize;

/// Which table a tile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(feature = "cli", feature = "wasm"), derive(serde::Serialize))]
#[cfg_attr(any(feature = "cli", feature = "wasm"), serde(rename_all = "lowercase"))]
pub enum TileKind {
    Consonant,
    Vowel,
}

impl TileKind {
    /// CSS class the tile element carries
    pub fn class(self) -> &'static str {
        match self {
            TileKind::Consonant => "consonant",
            TileKind::Vowel => "vowel",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.class())
    }
}

/// Single click or double click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Single,
    Double,
}

impl Activation {
    /// Map a native click counter (`MouseEvent.detail`) to an activation.
    ///
    /// The second click of a double click arrives with `detail == 2`; a third
    /// rapid click still counts as a double activation.
    pub fn from_click_count(detail: i32) -> Self {
        if detail >= 2 {
            Activation::Double
        } else {
            Activation::Single
        }
    }
}

/// What the runtime clipboard can accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCapability {
    /// Typed (`text/html`) clipboard items are supported
    Rich,
    /// Only plain text can be written
    PlainOnly,
}

impl ClipboardCapability {
    pub fn is_rich(self) -> bool {
        self == ClipboardCapability::Rich
    }
}

/// Content handed to the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    /// `text/html` content, already wrapped in `<i>`
    Html(String),
    /// Plain text with markup stripped
    Text(String),
}

impl ClipboardPayload {
    pub const HTML_MIME: &'static str = "text/html";

    /// The payload content regardless of type
    pub fn content(&self) -> &str {
        match self {
            ClipboardPayload::Html(s) | ClipboardPayload::Text(s) => s,
        }
    }

    /// Plain-text fallback for the payload (used as alt text for HTML writes)
    pub fn alt_text(&self) -> String {
        match self {
            ClipboardPayload::Html(s) => plain_text(s),
            ClipboardPayload::Text(s) => s.clone(),
        }
    }
}

/// One interactive cell on the board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(feature = "cli", feature = "wasm"), derive(serde::Serialize))]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    /// Hebrew symbol, rendered right-to-left
    pub symbol: &'static str,
    /// Transliteration, possibly with inline markup
    pub transliteration: &'static str,
    /// Uppercase transliteration, if the character has one
    pub uppercase: Option<&'static str>,
}

impl Tile {
    /// The string an activation copies.
    ///
    /// A double activation on a tile without an uppercase form is an error;
    /// callers surface it to the user and skip the clipboard.
    pub fn effective(&self, activation: Activation) -> BoardResult<&'static str> {
        match activation {
            Activation::Single => Ok(self.transliteration),
            Activation::Double => self
                .uppercase
                .ok_or_else(|| BoardError::no_uppercase(self.symbol, self.transliteration)),
        }
    }

    /// Build the clipboard payload for an activation.
    pub fn payload(
        &self,
        activation: Activation,
        capability: ClipboardCapability,
    ) -> BoardResult<ClipboardPayload> {
        let effective = self.effective(activation)?;
        Ok(match capability {
            ClipboardCapability::Rich => ClipboardPayload::Html(italic_html(effective)),
            ClipboardCapability::PlainOnly => ClipboardPayload::Text(plain_text(effective)),
        })
    }

    /// Visible text of the transliteration
    pub fn plain_transliteration(&self) -> String {
        plain_text(self.transliteration)
    }

    /// The activation that copies the form a query names.
    ///
    /// A query naming the symbol or the base transliteration selects a single
    /// activation; one naming only the uppercase form selects a double one.
    pub fn activation_for(&self, query: &str) -> Option<Activation> {
        if self.symbol == query
            || self.transliteration == query
            || self.plain_transliteration() == query
        {
            Some(Activation::Single)
        } else if self
            .uppercase
            .map_or(false, |u| u == query || plain_text(u) == query)
        {
            Some(Activation::Double)
        } else {
            None
        }
    }

    /// Whether the tile matches a symbol or transliteration query
    pub fn matches(&self, query: &str) -> bool {
        self.activation_for(query).is_some()
    }
}

/// Build one tile per consonant and one per vowel variant from the built-in
/// tables.
pub fn build_tiles() -> Vec<Tile> {
    build_tiles_from(
        CONSONANTS.entries().map(|(s, t)| (*s, *t)),
        VOWELS.entries().map(|(s, v)| (*s, *v)),
        uppercase_of,
    )
}

/// Build tiles from arbitrary tables.
///
/// Consonants come first, then vowel variants; the iteration order of the
/// inputs is preserved and ids are assigned sequentially. No deduplication or
/// sorting takes place.
pub fn build_tiles_from<C, V, U>(consonants: C, vowels: V, uppercase: U) -> Vec<Tile>
where
    C: IntoIterator<Item = (&'static str, &'static str)>,
    V: IntoIterator<Item = (&'static str, &'static [&'static str])>,
    U: Fn(&str) -> Option<&'static str>,
{
    let consonant_tiles = consonants
        .into_iter()
        .map(|(symbol, translit)| (TileKind::Consonant, symbol, translit));
    let vowel_tiles = vowels.into_iter().flat_map(|(symbol, variants)| {
        variants
            .iter()
            .map(move |translit| (TileKind::Vowel, symbol, *translit))
    });

    consonant_tiles
        .chain(vowel_tiles)
        .enumerate()
        .map(|(id, (kind, symbol, transliteration))| Tile {
            id,
            kind,
            symbol,
            transliteration,
            uppercase: uppercase(transliteration),
        })
        .collect()
}

/// Expected tile count for the built-in tables
pub fn builtin_tile_count() -> usize {
    CONSONANTS.len() + vowel_variant_count()
}

/// Tiles matching a symbol or transliteration
pub fn find_tiles<'a>(tiles: &'a [Tile], query: &str) -> Vec<&'a Tile> {
    tiles.iter().filter(|t| t.matches(query)).collect()
}

/// Number of entries in the uppercase table
pub fn uppercase_entries() -> usize {
    UPPERCASE.len()
}
