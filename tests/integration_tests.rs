//! Integration tests for the symbol board

use hebrew_translit::{
    build_tiles, build_tiles_from, builtin_tile_count, plain_text, resolve_query, tile_for_symbol,
    Activation, BoardError, BoardOptions, CapabilityNotice, ClipboardCapability, ClipboardError,
    ClipboardPayload, FeedbackState, Host, SymbolBoard, Tile, TileId, CONSONANTS, VOWELS,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::time::Duration;

/// Host that records every interaction
struct RecordingHost {
    capability: ClipboardCapability,
    fail_writes: bool,
    notices: RefCell<usize>,
    mounted: RefCell<Vec<TileId>>,
    writes: RefCell<Vec<ClipboardPayload>>,
    feedback: RefCell<Vec<(TileId, &'static str, Option<&'static str>)>>,
    alerts: RefCell<Vec<String>>,
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingHost {
    fn new(capability: ClipboardCapability) -> Self {
        Self {
            capability,
            fail_writes: false,
            notices: RefCell::new(0),
            mounted: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
            feedback: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    fn failing(capability: ClipboardCapability) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(capability)
        }
    }
}

impl Host for RecordingHost {
    fn clipboard_capability(&self) -> ClipboardCapability {
        self.capability
    }

    fn show_capability_notice(&self, notice: &CapabilityNotice) {
        assert_eq!(notice.class, "failure");
        *self.notices.borrow_mut() += 1;
    }

    fn mount_tile(&self, tile: &Tile) {
        self.mounted.borrow_mut().push(tile.id);
    }

    async fn write_clipboard(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        self.writes.borrow_mut().push(payload.clone());
        if self.fail_writes {
            Err(ClipboardError::new("permission denied"))
        } else {
            Ok(())
        }
    }

    fn render_feedback(&self, tile: TileId, state: FeedbackState) {
        self.feedback
            .borrow_mut()
            .push((tile, state.label(), state.class()));
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

fn board(capability: ClipboardCapability) -> SymbolBoard<RecordingHost> {
    SymbolBoard::new(RecordingHost::new(capability), BoardOptions::default())
}

fn id_of(board: &SymbolBoard<RecordingHost>, symbol: &str, variant: usize) -> TileId {
    board
        .tiles()
        .iter()
        .filter(|t| t.symbol == symbol)
        .nth(variant)
        .map(|t| t.id)
        .unwrap()
}

fn activate(
    board: &SymbolBoard<RecordingHost>,
    id: TileId,
    activation: Activation,
) -> Result<FeedbackState, BoardError> {
    futures::executor::block_on(board.activate(id, activation))
}

// ============================================================================
// Tile construction
// ============================================================================

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tile_count_matches_tables() {
        let expected = CONSONANTS.len() + VOWELS.values().map(|v| v.len()).sum::<usize>();
        assert_eq!(build_tiles().len(), expected);
        assert_eq!(builtin_tile_count(), expected);
    }

    #[test]
    fn test_board_mounts_in_table_order() {
        let board = board(ClipboardCapability::Rich);
        let mounted = board.host().mounted.borrow().clone();
        assert_eq!(mounted, (0..builtin_tile_count()).collect::<Vec<_>>());

        let symbols: Vec<&str> = board.tiles().iter().map(|t| t.symbol).take(3).collect();
        assert_eq!(symbols, vec!["א", "ב", "ג"]);
    }

    #[test]
    fn test_every_builtin_tile_has_uppercase() {
        assert!(build_tiles().iter().all(|t| t.uppercase.is_some()));
    }

    #[test]
    fn test_capability_notice_shown_once_when_plain_only() {
        let board = board(ClipboardCapability::PlainOnly);
        assert_eq!(*board.host().notices.borrow(), 1);
        // Tiles are still built
        assert_eq!(board.tiles().len(), builtin_tile_count());
    }

    #[test]
    fn test_no_capability_notice_with_rich_clipboard() {
        let board = board(ClipboardCapability::Rich);
        assert_eq!(*board.host().notices.borrow(), 0);
    }
}

// ============================================================================
// Copy interaction
// ============================================================================

mod copy {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tav_single_rich() {
        let board = board(ClipboardCapability::Rich);
        let id = id_of(&board, "ת", 0);
        assert_eq!(activate(&board, id, Activation::Single), Ok(FeedbackState::Success));

        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![ClipboardPayload::Html("<i>\u{1e6f}</i>".to_string())]
        );
        assert_eq!(
            board.host().feedback.borrow().clone(),
            vec![(id, "copied!", Some("success")), (id, "", None)]
        );
        assert_eq!(
            board.host().sleeps.borrow().clone(),
            vec![Duration::from_millis(1000)]
        );
    }

    #[test]
    fn test_shewa_double_rich() {
        let board = board(ClipboardCapability::Rich);
        let id = id_of(&board, "\u{25cc}\u{05b0}", 0);
        activate(&board, id, Activation::Double).unwrap();
        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![ClipboardPayload::Html("<i><sup>E</sup></i>".to_string())]
        );
    }

    #[test]
    fn test_shewa_double_plain() {
        let board = board(ClipboardCapability::PlainOnly);
        let id = id_of(&board, "\u{25cc}\u{05b0}", 0);
        activate(&board, id, Activation::Double).unwrap();
        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![ClipboardPayload::Text("E".to_string())]
        );
    }

    #[test]
    fn test_aleph_double_equals_single() {
        let board = board(ClipboardCapability::Rich);
        let id = id_of(&board, "א", 0);
        activate(&board, id, Activation::Single).unwrap();
        activate(&board, id, Activation::Double).unwrap();
        let writes = board.host().writes.borrow().clone();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
        assert_eq!(writes[0], ClipboardPayload::Html("<i>\u{02be}</i>".to_string()));
    }

    #[test]
    fn test_upper_and_base_selection_for_all_tiles() {
        let board = board(ClipboardCapability::Rich);
        for tile in build_tiles() {
            activate(&board, tile.id, Activation::Single).unwrap();
            activate(&board, tile.id, Activation::Double).unwrap();
        }
        let writes = board.host().writes.borrow().clone();
        for (tile, pair) in build_tiles().iter().zip(writes.chunks(2)) {
            assert_eq!(
                pair[0],
                ClipboardPayload::Html(format!("<i>{}</i>", tile.transliteration))
            );
            assert_eq!(
                pair[1],
                ClipboardPayload::Html(format!("<i>{}</i>", tile.uppercase.unwrap()))
            );
        }
    }

    #[test]
    fn test_plain_path_strips_markup_for_all_tiles() {
        let board = board(ClipboardCapability::PlainOnly);
        for tile in build_tiles() {
            activate(&board, tile.id, Activation::Single).unwrap();
        }
        let writes = board.host().writes.borrow().clone();
        for (tile, write) in build_tiles().iter().zip(writes.iter()) {
            assert_eq!(
                write,
                &ClipboardPayload::Text(plain_text(tile.transliteration))
            );
            assert!(!write.content().contains('<'));
        }
    }

    #[test]
    fn test_qamets_variants_copy_independently() {
        let board = board(ClipboardCapability::PlainOnly);
        let gadol = id_of(&board, "\u{25cc}\u{05b8}", 0);
        let hatuf = id_of(&board, "\u{25cc}\u{05b8}", 1);
        activate(&board, gadol, Activation::Single).unwrap();
        activate(&board, hatuf, Activation::Double).unwrap();
        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![
                ClipboardPayload::Text("\u{0101}".to_string()),
                ClipboardPayload::Text("\u{014e}".to_string()),
            ]
        );
    }
}

// ============================================================================
// Failure paths
// ============================================================================

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    static VARIANTS: &[&str] = &["x"];

    fn board_without_uppercase() -> SymbolBoard<RecordingHost> {
        let tiles = build_tiles_from(vec![("?", "y")], vec![("v", VARIANTS)], |_| None);
        SymbolBoard::with_tiles(
            RecordingHost::new(ClipboardCapability::Rich),
            BoardOptions::default(),
            tiles,
        )
    }

    #[test]
    fn test_double_without_uppercase_warns_and_skips_clipboard() {
        let board = board_without_uppercase();
        for id in 0..board.tiles().len() {
            let result = activate(&board, id, Activation::Double);
            assert!(matches!(result, Err(BoardError::NoUppercaseVariant { .. })));
        }
        assert!(board.host().writes.borrow().is_empty());
        assert!(board.host().feedback.borrow().is_empty());
        assert_eq!(
            board.host().alerts.borrow().clone(),
            vec![
                "This character has no uppercase variant.".to_string(),
                "This character has no uppercase variant.".to_string(),
            ]
        );
    }

    #[test]
    fn test_single_without_uppercase_still_copies() {
        let board = board_without_uppercase();
        assert_eq!(activate(&board, 1, Activation::Single), Ok(FeedbackState::Success));
        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![ClipboardPayload::Html("<i>x</i>".to_string())]
        );
    }

    #[test]
    fn test_write_failure_feedback_then_reset() {
        let board = SymbolBoard::new(
            RecordingHost::failing(ClipboardCapability::Rich),
            BoardOptions::default(),
        );
        assert_eq!(activate(&board, 0, Activation::Single), Ok(FeedbackState::Failure));
        assert_eq!(
            board.host().feedback.borrow().clone(),
            vec![(0, "copying failed", Some("failure")), (0, "", None)]
        );
        assert_eq!(board.feedback(0), Some(FeedbackState::Idle));
        assert!(board.host().alerts.borrow().is_empty());
    }

    #[test]
    fn test_custom_feedback_delay() {
        let board = SymbolBoard::new(
            RecordingHost::new(ClipboardCapability::Rich),
            BoardOptions::default().with_feedback_delay(Duration::from_millis(250)),
        );
        activate(&board, 0, Activation::Single).unwrap();
        assert_eq!(
            board.host().sleeps.borrow().clone(),
            vec![Duration::from_millis(250)]
        );
    }
}

// ============================================================================
// Lookup helpers
// ============================================================================

mod lookup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tile_for_symbol_sin_shin() {
        assert_eq!(tile_for_symbol("\u{fb2b}", 0).unwrap().transliteration, "\u{015b}");
        assert_eq!(tile_for_symbol("\u{fb2a}", 0).unwrap().transliteration, "\u{0161}");
    }

    #[test]
    fn test_tile_for_symbol_pe_uppercase_keeps_combining_macron() {
        let pe = tile_for_symbol("פ", 0).unwrap();
        assert_eq!(pe.uppercase, Some("P\u{0304}"));
    }

    #[test]
    fn test_uppercase_query_copies_uppercase_form() {
        let board = SymbolBoard::new(
            RecordingHost::new(ClipboardCapability::Rich),
            BoardOptions::default(),
        );
        let (tile, activation) = resolve_query(board.tiles(), "\u{1e6e}", None).unwrap();
        let id = tile.id;
        assert_eq!(activate(&board, id, activation), Ok(FeedbackState::Success));
        assert_eq!(
            board.host().writes.borrow().clone(),
            vec![ClipboardPayload::Html("<i>\u{1e6e}</i>".to_string())]
        );
    }

    #[test]
    fn test_ambiguous_query_copies_nothing_without_variant() {
        let tiles = build_tiles();
        assert!(matches!(
            resolve_query(&tiles, "\u{0119}", None),
            Err(BoardError::AmbiguousQuery { matches: 2, .. })
        ));
        let (segol, _) = resolve_query(&tiles, "\u{0119}", Some(0)).unwrap();
        assert_eq!(segol.symbol, "\u{25cc}\u{05b6}");
    }
}
