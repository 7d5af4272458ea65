//! Constants used throughout the TUI module

/// Status message timeout in seconds
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height including borders
pub const FOOTER_HEIGHT: u16 = 3;

/// How long the event loop waits for input before polling loads again
pub const EVENT_POLL_MS: u64 = 100;

/// Width of one swatch cell in characters
pub const SWATCH_WIDTH: usize = 4;
