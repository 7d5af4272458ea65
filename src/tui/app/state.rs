//! Application state structures
//!
//! Groups the form app's transient UI fields by concern.

use std::time::Instant;

/// UI-related state (status messages, help overlay)
#[derive(Debug, Default)]
pub struct UIState {
    /// Whether to show the key reference
    pub show_help: bool,
    /// Status message to display (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// When status message was set (for auto-clearing)
    pub status_message_time: Option<Instant>,
}

/// Text entry state for the selected field
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Whether the user is typing a value
    pub editing: bool,
    /// Text typed so far
    pub buffer: String,
}

impl InputState {
    /// Start editing with `initial` prefilled
    pub fn begin(&mut self, initial: String) {
        self.editing = true;
        self.buffer = initial;
    }

    /// Stop editing and hand back the typed text
    pub fn finish(&mut self) -> String {
        self.editing = false;
        std::mem::take(&mut self.buffer)
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }
}
