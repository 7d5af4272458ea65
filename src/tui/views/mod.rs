//! TUI view components
//!
//! Each function draws one area of the screen from plain data.

mod footer;
mod form;
mod header;
mod help;

pub use footer::*;
pub use form::*;
pub use header::*;
pub use help::*;
