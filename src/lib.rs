//! schemaform library
//!
//! Schema-driven configuration forms: field dispatch by type tag, per-field
//! store binding, and a terminal front end (feature `tui`).

pub mod config;
pub mod error;
pub mod fields;
pub mod schema;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use error::{FormError, FormResult};
pub use fields::{Dispatcher, FieldEditor, FieldKind, FieldSlot, Resolution, resolve};
pub use schema::{FieldDescriptor, PaletteEntry, Schema, SchemaLoader};
pub use store::{AppletConfig, ConfigStore};
