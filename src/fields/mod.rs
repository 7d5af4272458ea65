//! Field editors and dispatch
//!
//! Every field type maps to one editor. Editors share the same store binding
//! protocol (see [`binding`]) and expose their state as a plain
//! [`EditorView`] description so any front end can draw them.

pub mod assets;
pub mod binding;
pub mod color;
pub mod dispatcher;
mod kind;
mod toggle;
mod value;

pub use assets::{AssetLoader, BuiltinAssetLoader, EditorAssets, KeyHint};
pub use binding::{FieldBinding, Hydration};
pub use color::{Channel, ColorEditor, ColorView, Swatch, SwatchView, normalize_hex};
pub use dispatcher::{
    Dispatcher, FieldSlot, MountedField, Resolution, SlotView, UnsupportedField, resolve,
};
pub use kind::FieldKind;
pub use toggle::ToggleEditor;
pub use value::ValueEditor;

use crate::schema::FieldDescriptor;
use crate::store::ConfigStore;

/// User interaction routed to an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    /// Replace the value with typed text
    Set(String),
    /// Flip a boolean value
    Toggle,
    /// Move the swatch cursor forward
    NextSwatch,
    /// Move the swatch cursor back
    PrevSwatch,
    /// Apply the swatch under the cursor
    ApplySwatch,
    /// Step one color channel by a signed number of steps
    Nudge(Channel, i16),
}

/// Renderable description of an editor's current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorView {
    Color(ColorView),
    Toggle { on: bool },
    Value { kind: FieldKind, value: String },
}

/// Editor tuning taken from user settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    /// Amount one nudge moves a color channel
    pub nudge_step: u8,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self { nudge_step: 16 }
    }
}

/// A mounted editor bound to one field id
pub trait FieldEditor {
    fn descriptor(&self) -> &FieldDescriptor;

    fn kind(&self) -> FieldKind;

    /// Re-hydrate if the store changed for this field.
    /// Returns true when at least one change was processed.
    fn sync(&mut self) -> bool;

    /// Apply a user interaction. Returns false when the editor ignores it.
    fn handle_input(&mut self, input: EditorInput) -> bool;

    /// Current value as editable text
    fn text_value(&self) -> String;

    fn view(&self) -> EditorView;
}

/// Build the editor registered for `kind`
pub fn instantiate(
    kind: FieldKind,
    descriptor: &FieldDescriptor,
    store: &ConfigStore,
    settings: EditorSettings,
) -> Box<dyn FieldEditor> {
    match kind {
        FieldKind::Color => Box::new(
            ColorEditor::mount(descriptor, store).with_nudge_step(settings.nudge_step),
        ),
        FieldKind::OnOff | FieldKind::Toggle => {
            Box::new(ToggleEditor::mount(kind, descriptor, store))
        }
        FieldKind::DateTime
        | FieldKind::Dropdown
        | FieldKind::Location
        | FieldKind::LocationBased
        | FieldKind::OAuth2
        | FieldKind::Png
        | FieldKind::Text
        | FieldKind::Typeahead => Box::new(ValueEditor::mount(kind, descriptor, store)),
    }
}
