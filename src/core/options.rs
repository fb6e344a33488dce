//! Board options
//!
//! The symbol tables are compiled in; these are the only runtime knobs.

use std::time::Duration;

/// How long copy feedback stays visible
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Options for building and driving a [`SymbolBoard`](crate::SymbolBoard)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    /// Delay before copy feedback is cleared
    /// Default: 1000ms
    pub feedback_delay: Duration,

    /// Id of the element tiles are appended to (browser host)
    /// Default: "main"
    pub container_id: String,

    /// Id of the element that receives the capability banner (browser host)
    /// Default: "header"
    pub header_id: String,

    /// Write plain text even when rich clipboard writes are available
    /// Default: false
    pub force_plain_text: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            container_id: "main".to_string(),
            header_id: "header".to_string(),
            force_plain_text: false,
        }
    }
}

impl BoardOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that always copy plain text
    pub fn plain_text() -> Self {
        Self {
            force_plain_text: true,
            ..Self::default()
        }
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }
}
