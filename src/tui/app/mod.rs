//! Application module
//!
//! The form app's state and logic, split by concern.

pub mod state;

mod core;
mod events;
mod rendering;

pub use core::*;
pub use state::{InputState, UIState};
