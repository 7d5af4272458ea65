//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod form;
mod logging;
mod version;

pub use commands::{ConfigSubcommand, handle_config_command};
pub use form::{FormArgs, handle_edit_command, handle_inspect_command};
pub use logging::*;
pub use version::display_version;
