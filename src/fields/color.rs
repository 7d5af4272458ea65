//! Color field editor
//!
//! The reference editor for the store binding protocol. Local state is the
//! canonical `#rrggbb` form of the stored value; the store itself keeps
//! whatever raw text was written (including an un-prefixed default).

use super::binding::{FieldBinding, Hydration};
use super::{EditorInput, EditorView, FieldEditor, FieldKind};
use crate::schema::{FieldDescriptor, PaletteEntry};
use crate::store::ConfigStore;

/// Built-in color when neither the store nor the descriptor provides one
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Display color for palette entries that are not hex text
pub const MALFORMED_PRESET_COLOR: &str = "#000000";

/// Normalize color text to canonical form
///
/// Total over all inputs:
/// - `None`, empty or whitespace-only text yields `fallback`
/// - surrounding whitespace is trimmed
/// - a leading `#` is added when missing
/// - hex digits are lowercased so equal colors compare equal
///
/// The text is not otherwise validated; `"zz"` becomes `"#zz"`.
pub fn normalize_hex(raw: Option<&str>, fallback: &str) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with('#') {
        lowered
    } else {
        format!("#{}", lowered)
    }
}

/// Decode canonical color text to RGB, if it is a valid color
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    csscolorparser::parse(hex).ok().map(|color| {
        let [r, g, b, _] = color.to_rgba8();
        [r, g, b]
    })
}

fn rgb_to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// RGB channel selector for nudging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A palette preset in display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Canonical color
    pub hex: String,
    /// Optional preset name
    pub name: Option<String>,
    /// Entry was not a string or `{hex}` record
    pub malformed: bool,
}

impl Swatch {
    pub fn from_entry(entry: &PaletteEntry) -> Self {
        let hex = match entry.raw_hex() {
            Some(raw) => normalize_hex(Some(raw), MALFORMED_PRESET_COLOR),
            None => MALFORMED_PRESET_COLOR.to_string(),
        };
        Self {
            hex,
            name: entry.name().map(str::to_string),
            malformed: entry.raw_hex().is_none(),
        }
    }

    /// Whether this swatch shows the given color
    pub fn matches(&self, color: &str) -> bool {
        self.hex.eq_ignore_ascii_case(color)
    }
}

/// Swatch as rendered: selection and cursor state resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    pub hex: String,
    pub name: Option<String>,
    pub rgb: Option<[u8; 3]>,
    pub selected: bool,
    pub focused: bool,
}

/// Renderable color editor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorView {
    pub value: String,
    pub rgb: Option<[u8; 3]>,
    pub swatches: Vec<SwatchView>,
}

/// Color picker bound to one field
pub struct ColorEditor {
    descriptor: FieldDescriptor,
    binding: FieldBinding,
    color: String,
    swatches: Vec<Swatch>,
    cursor: usize,
    nudge_step: u8,
}

impl ColorEditor {
    /// Create the editor and run the first hydration pass
    pub fn mount(descriptor: &FieldDescriptor, store: &ConfigStore) -> Self {
        let color = normalize_hex(descriptor.raw_default().as_deref(), DEFAULT_COLOR);
        let swatches = descriptor.palette().iter().map(Swatch::from_entry).collect();

        let mut editor = Self {
            descriptor: descriptor.clone(),
            binding: FieldBinding::attach(descriptor, store),
            color,
            swatches,
            cursor: 0,
            nudge_step: super::EditorSettings::default().nudge_step,
        };
        editor.hydrate();
        editor.sync();
        editor
    }

    pub fn with_nudge_step(mut self, step: u8) -> Self {
        self.nudge_step = step;
        self
    }

    /// Canonical current color
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn is_selected(&self, swatch: &Swatch) -> bool {
        swatch.matches(&self.color)
    }

    fn hydrate(&mut self) {
        match self.binding.hydrate() {
            Hydration::Stored(value) => {
                self.color = normalize_hex(Some(&value), DEFAULT_COLOR);
            }
            // Seeding queues a notification; the next sync reads it back
            Hydration::Seeded(_) | Hydration::Unset => {}
        }
    }

    /// Handle a new color from the picker
    ///
    /// Local state updates immediately; the raw value goes to the store.
    pub fn on_change(&mut self, value: &str) {
        self.color = normalize_hex(Some(value), DEFAULT_COLOR);
        self.binding.commit(value);
    }

    /// Apply a palette preset as if it were picked directly
    pub fn select_swatch(&mut self, index: usize) -> bool {
        let Some(hex) = self.swatches.get(index).map(|s| s.hex.clone()) else {
            return false;
        };
        self.cursor = index;
        self.on_change(&hex);
        true
    }

    /// Step one channel of the current color
    ///
    /// Does nothing when the current color cannot be decoded.
    pub fn nudge(&mut self, channel: Channel, steps: i16) -> bool {
        let Some(mut rgb) = hex_to_rgb(&self.color) else {
            tracing::debug!(color = %self.color, "Cannot nudge undecodable color");
            return false;
        };

        let delta = i32::from(steps) * i32::from(self.nudge_step);
        let slot = &mut rgb[channel.index()];
        *slot = (i32::from(*slot) + delta).clamp(0, 255) as u8;

        let hex = rgb_to_hex(rgb);
        self.on_change(&hex);
        true
    }

    fn move_cursor(&mut self, forward: bool) -> bool {
        let len = self.swatches.len();
        if len == 0 {
            return false;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
        true
    }
}

impl FieldEditor for ColorEditor {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Color
    }

    fn sync(&mut self) -> bool {
        if self.binding.take_changes() == 0 {
            return false;
        }
        self.hydrate();
        true
    }

    fn handle_input(&mut self, input: EditorInput) -> bool {
        match input {
            EditorInput::Set(value) => {
                self.on_change(&value);
                true
            }
            EditorInput::NextSwatch => self.move_cursor(true),
            EditorInput::PrevSwatch => self.move_cursor(false),
            EditorInput::ApplySwatch => self.select_swatch(self.cursor),
            EditorInput::Nudge(channel, steps) => self.nudge(channel, steps),
            EditorInput::Toggle => false,
        }
    }

    fn text_value(&self) -> String {
        self.color.clone()
    }

    fn view(&self) -> EditorView {
        let swatches = self
            .swatches
            .iter()
            .enumerate()
            .map(|(i, swatch)| SwatchView {
                hex: swatch.hex.clone(),
                name: swatch.name.clone(),
                rgb: hex_to_rgb(&swatch.hex),
                selected: self.is_selected(swatch),
                focused: i == self.cursor,
            })
            .collect();

        EditorView::Color(ColorView {
            value: self.color.clone(),
            rgb: hex_to_rgb(&self.color),
            swatches,
        })
    }
}
