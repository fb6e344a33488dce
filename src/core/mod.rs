//! Core board modules
//!
//! - `markup`: plain-text and italic renderings of transliteration fragments
//! - `tile`: tile construction and clipboard payloads
//! - `board`: the copy/feedback cycle behind a `Host`
//! - `options`: runtime knobs

pub mod board;
pub mod markup;
pub mod options;
pub mod tile;

// Re-export main types and functions
pub use board::{CapabilityNotice, FeedbackState, Host, SymbolBoard};
pub use markup::{has_markup, italic_html, plain_text};
pub use options::{BoardOptions, DEFAULT_FEEDBACK_DELAY};
pub use tile::{
    build_tiles, build_tiles_from, builtin_tile_count, find_tiles, Activation,
    ClipboardCapability, ClipboardPayload, Tile, TileId, TileKind,
};
