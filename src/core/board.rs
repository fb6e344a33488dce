//! The symbol board - tile construction and the copy/feedback cycle
//!
//! The board is platform-neutral. Everything that touches the outside world
//! (clipboard, DOM, timers, alerts) goes through a [`Host`]; the browser host
//! lives in the `wasm` module and tests use a recording host.
//!
//! Per-tile feedback follows a small state machine:
//!
//! ```text
//! Idle -> Pending (activation) -> Success | Failure (write settles) -> Idle (after delay)
//! ```
//!
//! `Pending` is tracked but never rendered.

use std::cell::Cell;
use std::time::Duration;

use log::{debug, warn};

use crate::core::options::BoardOptions;
use crate::core::tile::{
    build_tiles, Activation, ClipboardCapability, ClipboardPayload, Tile, TileId,
};
use crate::utils::error::{BoardError, BoardResult, ClipboardError};

/// Transient copy feedback of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

impl FeedbackState {
    /// Text shown in the tile's feedback area
    pub fn label(self) -> &'static str {
        match self {
            FeedbackState::Idle | FeedbackState::Pending => "",
            FeedbackState::Success => "copied!",
            FeedbackState::Failure => "copying failed",
        }
    }

    /// Visual state class, if any
    pub fn class(self) -> Option<&'static str> {
        match self {
            FeedbackState::Idle | FeedbackState::Pending => None,
            FeedbackState::Success => Some("success"),
            FeedbackState::Failure => Some("failure"),
        }
    }

    /// Every class a feedback element may carry
    pub const CLASSES: [&'static str; 2] = ["success", "failure"];
}

/// Persistent banner shown when rich clipboard writes are unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityNotice {
    /// Class applied to the banner element
    pub class: &'static str,
    /// Banner content (inline HTML)
    pub html: &'static str,
}

impl CapabilityNotice {
    pub const NO_RICH_CLIPBOARD: CapabilityNotice = CapabilityNotice {
        class: "failure",
        html: "This browser does not fully support copying; \
               copying overscript minuscules will not work. \
               If you are using Firefox, consider setting \
               <tt>dom.events.asyncClipboard.clipboardItem</tt> to <tt>true</tt> \
               in <tt>about:config</tt>.",
    };
}

/// Everything the board needs from its runtime.
///
/// Hosts are single-threaded: futures returned here are not `Send`, which
/// matches the browser event loop.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Detect what the clipboard accepts. Called once, at board construction.
    fn clipboard_capability(&self) -> ClipboardCapability;

    /// Show the degraded-clipboard banner
    fn show_capability_notice(&self, notice: &CapabilityNotice);

    /// Append a tile to the board's container
    fn mount_tile(&self, tile: &Tile);

    /// Write to the clipboard
    async fn write_clipboard(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;

    /// Update a tile's feedback text and visual state
    fn render_feedback(&self, tile: TileId, state: FeedbackState);

    /// Blocking user-facing warning
    fn alert(&self, message: &str);

    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default)]
struct FeedbackSlot {
    state: Cell<FeedbackState>,
    // Bumped on every activation; a reset only applies to its own cycle
    generation: Cell<u64>,
}

impl FeedbackSlot {
    fn begin(&self) -> u64 {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.state.set(FeedbackState::Pending);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

/// A board of transliteration tiles bound to a host
pub struct SymbolBoard<H: Host> {
    host: H,
    options: BoardOptions,
    capability: ClipboardCapability,
    tiles: Vec<Tile>,
    feedback: Vec<FeedbackSlot>,
}

impl<H: Host> SymbolBoard<H> {
    /// Build the board from the built-in tables and mount every tile.
    pub fn new(host: H, options: BoardOptions) -> Self {
        Self::with_tiles(host, options, build_tiles())
    }

    /// Build the board from a prepared tile list.
    ///
    /// The capability check runs first and only ever shows a notice; tiles are
    /// mounted either way, in list order.
    pub fn with_tiles(host: H, options: BoardOptions, tiles: Vec<Tile>) -> Self {
        let detected = host.clipboard_capability();
        if !detected.is_rich() {
            warn!("rich clipboard writes unavailable, falling back to plain text");
            host.show_capability_notice(&CapabilityNotice::NO_RICH_CLIPBOARD);
        }
        let capability = if options.force_plain_text {
            ClipboardCapability::PlainOnly
        } else {
            detected
        };
        debug!("clipboard capability: {:?}", capability);

        for tile in &tiles {
            host.mount_tile(tile);
        }
        debug!("mounted {} tiles", tiles.len());

        let feedback = tiles.iter().map(|_| FeedbackSlot::default()).collect();
        Self {
            host,
            options,
            capability,
            tiles,
            feedback,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn capability(&self) -> ClipboardCapability {
        self.capability
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current feedback state of a tile
    pub fn feedback(&self, id: TileId) -> Option<FeedbackState> {
        self.feedback.get(id).map(|slot| slot.state.get())
    }

    /// Copy a tile's transliteration and run its feedback cycle.
    ///
    /// Returns the settled feedback state (`Success` or `Failure`). A double
    /// activation on a tile without an uppercase form alerts the user and
    /// returns `NoUppercaseVariant` without touching the clipboard.
    pub async fn activate(&self, id: TileId, activation: Activation) -> BoardResult<FeedbackState> {
        let tile = self.tiles.get(id).ok_or(BoardError::UnknownTile(id))?;
        let slot = &self.feedback[id];

        let payload = match tile.payload(activation, self.capability) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("tile {}: {}", id, err);
                self.host.alert(&err.user_message());
                return Err(err);
            }
        };

        let generation = slot.begin();
        let outcome = match self.host.write_clipboard(&payload).await {
            Ok(()) => {
                debug!("tile {}: copied {:?}", id, payload);
                FeedbackState::Success
            }
            Err(err) => {
                debug!("tile {}: {}", id, err);
                FeedbackState::Failure
            }
        };
        self.set_feedback(id, outcome);

        // Runs for both outcomes
        self.host.sleep(self.options.feedback_delay).await;
        if slot.is_current(generation) {
            self.set_feedback(id, FeedbackState::Idle);
        }

        Ok(outcome)
    }

    fn set_feedback(&self, id: TileId, state: FeedbackState) {
        self.feedback[id].state.set(state);
        self.host.render_feedback(id, state);
    }
}
