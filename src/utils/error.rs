//! Error handling for board operations
//!
//! This module provides the error type returned by tile activation and symbol
//! lookup, plus the clipboard failure reported by hosts.

use thiserror::Error;

use crate::core::tile::TileId;

/// Message shown to the user when a double activation hits a tile without an
/// uppercase form.
pub const NO_UPPERCASE_MESSAGE: &str = "This character has no uppercase variant.";

/// A rejected clipboard write (permissions, unsupported environment, user denial)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {message}")]
pub struct ClipboardError {
    pub message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        ClipboardError {
            message: message.into(),
        }
    }
}

/// Board error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Double activation on a tile without an uppercase form
    #[error("{symbol} ({transliteration}) has no uppercase variant")]
    NoUppercaseVariant {
        symbol: String,
        transliteration: String,
    },
    /// Activation addressed a tile that was never built
    #[error("no tile with id {0}")]
    UnknownTile(TileId),
    /// Lookup for a symbol that is not in the tables
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),
    /// Variant index past the end of a symbol's variants
    #[error("{symbol} has {available} variant(s), variant {index} requested")]
    VariantOutOfRange {
        symbol: String,
        index: usize,
        available: usize,
    },
    /// Query matched several tiles and no variant was chosen
    #[error("'{query}' matches {matches} tiles, choose a variant")]
    AmbiguousQuery { query: String, matches: usize },
    /// Clipboard write rejected
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

// Convenience constructors
impl BoardError {
    pub fn no_uppercase(symbol: impl Into<String>, transliteration: impl Into<String>) -> Self {
        BoardError::NoUppercaseVariant {
            symbol: symbol.into(),
            transliteration: transliteration.into(),
        }
    }

    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        BoardError::UnknownSymbol(symbol.into())
    }

    /// Text to show the user for this error
    pub fn user_message(&self) -> String {
        match self {
            BoardError::NoUppercaseVariant { .. } => NO_UPPERCASE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_uppercase_display() {
        let err = BoardError::no_uppercase("x", "y");
        assert!(err.to_string().contains("no uppercase variant"));
        assert_eq!(err.user_message(), NO_UPPERCASE_MESSAGE);
    }

    #[test]
    fn test_variant_out_of_range_display() {
        let err = BoardError::VariantOutOfRange {
            symbol: "\u{25cc}\u{05b8}".to_string(),
            index: 5,
            available: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 variant(s)"));
        assert!(msg.contains("variant 5"));
    }

    #[test]
    fn test_ambiguous_query_display() {
        let err = BoardError::AmbiguousQuery {
            query: "\u{0119}".to_string(),
            matches: 2,
        };
        assert_eq!(err.to_string(), "'\u{0119}' matches 2 tiles, choose a variant");
    }

    #[test]
    fn test_clipboard_error_conversion() {
        let err: BoardError = ClipboardError::new("denied").into();
        assert_eq!(err.to_string(), "clipboard write failed: denied");
    }
}
