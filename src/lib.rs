//! # hebrew-translit
//!
//! Hebrew transliteration helper: a board of clickable tiles, one per Hebrew
//! consonant or vowel variant, that copies the transliteration to the
//! clipboard.
//!
//! ## Features
//!
//! - **Static tables**: SBL-style transliterations with uppercase forms
//! - **Rich clipboard**: copies italic HTML where supported, plain text otherwise
//! - **Double click for uppercase**: a double activation copies the uppercase form
//! - **WASM Support**: mounts the board into a web page (feature `wasm`)
//! - **CLI**: list, look up and copy from the terminal (feature `cli`)
//!
//! ## Usage Examples
//!
//! ### Clipboard payloads
//!
//! ```rust
//! use hebrew_translit::{tile_for_symbol, Activation, ClipboardCapability, ClipboardPayload};
//!
//! let tav = tile_for_symbol("ת", 0).unwrap();
//! let payload = tav.payload(Activation::Single, ClipboardCapability::Rich).unwrap();
//! assert_eq!(payload, ClipboardPayload::Html("<i>\u{1e6f}</i>".to_string()));
//!
//! let shewa = tile_for_symbol("\u{25cc}\u{05b0}", 0).unwrap();
//! let payload = shewa.payload(Activation::Double, ClipboardCapability::PlainOnly).unwrap();
//! assert_eq!(payload, ClipboardPayload::Text("E".to_string()));
//! ```

/// Core board modules
pub mod core;

/// Data layer - static transliteration tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use crate::core::board;
pub use crate::core::markup;
pub use crate::core::tile;
pub use crate::core::{
    build_tiles, build_tiles_from, builtin_tile_count, find_tiles, has_markup, italic_html,
    plain_text, Activation, BoardOptions, CapabilityNotice, ClipboardCapability,
    ClipboardPayload, FeedbackState, Host, SymbolBoard, Tile, TileId, TileKind,
};

// Re-export symbol data
pub use data::symbols;
pub use data::{uppercase_of, CONSONANTS, UPPERCASE, VOWELS};

// Re-export utilities
pub use utils::error::{BoardError, BoardResult, ClipboardError, NO_UPPERCASE_MESSAGE};

/// Find the tile for a Hebrew symbol and variant index.
///
/// Consonants have a single variant (index 0); vowels may have several.
pub fn tile_for_symbol(symbol: &str, variant: usize) -> BoardResult<Tile> {
    let variants = transliterations_of(symbol);
    if variants.is_empty() {
        return Err(BoardError::unknown_symbol(symbol));
    }
    let transliteration = variants
        .get(variant)
        .ok_or_else(|| BoardError::VariantOutOfRange {
            symbol: symbol.to_string(),
            index: variant,
            available: variants.len(),
        })?;
    build_tiles()
        .into_iter()
        .find(|t| t.symbol == symbol && t.transliteration == *transliteration)
        .ok_or_else(|| BoardError::unknown_symbol(symbol))
}

/// Transliterations available for a Hebrew symbol, in table order
pub fn transliterations_of(symbol: &str) -> Vec<&'static str> {
    if let Some(translit) = CONSONANTS.get(symbol) {
        return vec![*translit];
    }
    VOWELS
        .get(symbol)
        .map(|variants| variants.to_vec())
        .unwrap_or_default()
}

/// Resolve a free-form query to one tile and the activation it names.
///
/// The query may be a Hebrew symbol, a transliteration or an uppercase form
/// (markup or visible text). With several matches a `variant` index is
/// required; an uppercase match selects a double activation.
pub fn resolve_query<'a>(
    tiles: &'a [Tile],
    query: &str,
    variant: Option<usize>,
) -> BoardResult<(&'a Tile, Activation)> {
    let found = find_tiles(tiles, query);
    if found.is_empty() {
        return Err(BoardError::unknown_symbol(query));
    }
    let index = match variant {
        Some(index) => index,
        None if found.len() > 1 => {
            return Err(BoardError::AmbiguousQuery {
                query: query.to_string(),
                matches: found.len(),
            })
        }
        None => 0,
    };
    let tile = found
        .get(index)
        .copied()
        .ok_or_else(|| BoardError::VariantOutOfRange {
            symbol: query.to_string(),
            index,
            available: found.len(),
        })?;
    let activation = tile.activation_for(query).unwrap_or(Activation::Single);
    Ok((tile, activation))
}
