//! Schema definitions
//!
//! A schema is an ordered list of field descriptors. Descriptors are read-only
//! input: the form never mutates them, it only dispatches on `type` and binds
//! each `id` to the config store.

mod loader;

pub use loader::SchemaLoader;

use serde::{Deserialize, Serialize};

/// Parsed schema document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema format version, when the document declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Fields in display order
    #[serde(rename = "schema")]
    pub fields: Vec<FieldDescriptor>,
}

/// Description of a single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique key into the config store
    pub id: String,

    /// Type tag selecting the editor; empty when the descriptor has none
    #[serde(rename = "type", default)]
    pub type_name: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Help text shown under the field
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon name (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Initial value, serialized per field type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Preset values offered as swatches
    #[serde(
        default,
        deserialize_with = "lenient_palette",
        skip_serializing_if = "Option::is_none"
    )]
    pub palette: Option<Vec<PaletteEntry>>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            name: None,
            description: None,
            icon: None,
            default: None,
            palette: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_palette(mut self, palette: Vec<PaletteEntry>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Label shown in the form: the display name, or the id
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// The default in its stored (raw) serialization
    ///
    /// Only truthy scalars count: `null`, `false`, zero, empty strings and
    /// non-scalar values mean "no default".
    pub fn raw_default(&self) -> Option<String> {
        match self.default.as_ref()? {
            serde_json::Value::Bool(false) => None,
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            value => scalar_to_string(value).filter(|value| !value.is_empty()),
        }
    }

    /// Palette entries, empty when the descriptor has none
    pub fn palette(&self) -> &[PaletteEntry] {
        self.palette.as_deref().unwrap_or(&[])
    }
}

/// One palette preset
///
/// Presets are either a bare hex string or a record with a `hex` field.
/// Anything else is kept as-is so the editor can render a fallback swatch
/// instead of rejecting the whole schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    Hex(String),
    Named {
        hex: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Malformed(serde_json::Value),
}

impl PaletteEntry {
    /// The preset's hex text, if the entry is well formed
    pub fn raw_hex(&self) -> Option<&str> {
        match self {
            PaletteEntry::Hex(hex) | PaletteEntry::Named { hex, .. } => Some(hex),
            PaletteEntry::Malformed(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PaletteEntry::Named { name, .. } => name.as_deref(),
            _ => None,
        }
    }
}

impl From<&str> for PaletteEntry {
    fn from(hex: &str) -> Self {
        PaletteEntry::Hex(hex.to_string())
    }
}

/// Accept a palette only when it is a list; any other shape means no swatches
fn lenient_palette<'de, D>(deserializer: D) -> Result<Option<Vec<PaletteEntry>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item.clone())
                        .unwrap_or(PaletteEntry::Malformed(item))
                })
                .collect(),
        )),
        other => {
            tracing::warn!("Ignoring palette that is not a list: {}", other);
            Ok(None)
        }
    }
}

/// Serialize a scalar JSON value the way the store keeps it
pub(crate) fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_deserialization() {
        let descriptor: FieldDescriptor = serde_json::from_value(json!({
            "id": "bg",
            "type": "color",
            "name": "Background",
            "desc": "Background color",
            "default": "112233",
            "palette": ["AABBCC", {"hex": "#001122", "name": "navy"}, 42]
        }))
        .unwrap();

        assert_eq!(descriptor.id, "bg");
        assert_eq!(descriptor.type_name, "color");
        assert_eq!(descriptor.label(), "Background");
        assert_eq!(descriptor.description.as_deref(), Some("Background color"));
        assert_eq!(descriptor.raw_default().as_deref(), Some("112233"));

        let palette = descriptor.palette();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0], PaletteEntry::Hex("AABBCC".to_string()));
        assert_eq!(palette[1].raw_hex(), Some("#001122"));
        assert_eq!(palette[1].name(), Some("navy"));
        assert_eq!(palette[2], PaletteEntry::Malformed(json!(42)));
        assert_eq!(palette[2].raw_hex(), None);
    }

    #[test]
    fn test_record_without_hex_is_malformed() {
        let entry: PaletteEntry = serde_json::from_value(json!({"name": "oops"})).unwrap();
        assert!(matches!(entry, PaletteEntry::Malformed(_)));
    }

    #[test]
    fn test_palette_that_is_not_a_list_is_ignored() {
        for palette in [json!("ff0000"), json!({}), json!(7), json!(null)] {
            let descriptor: FieldDescriptor = serde_json::from_value(json!({
                "id": "c",
                "type": "color",
                "palette": palette
            }))
            .unwrap();
            assert_eq!(descriptor.palette, None);
            assert!(descriptor.palette().is_empty());
        }
    }

    #[test]
    fn test_missing_type_deserializes_empty() {
        let descriptor: FieldDescriptor = serde_json::from_value(json!({"id": "c"})).unwrap();
        assert_eq!(descriptor.type_name, "");
    }

    #[test]
    fn test_falsy_defaults_are_not_defaults() {
        for default in [json!(false), json!(0), json!(0.0), json!("")] {
            let field = FieldDescriptor::new("f", "onoff").with_default(default);
            assert_eq!(field.raw_default(), None);
        }
    }

    #[test]
    fn test_raw_default_scalars() {
        let field = FieldDescriptor::new("f", "onoff").with_default(true);
        assert_eq!(field.raw_default().as_deref(), Some("true"));

        let field = FieldDescriptor::new("f", "text").with_default(3);
        assert_eq!(field.raw_default().as_deref(), Some("3"));

        let field = FieldDescriptor::new("f", "color").with_default("");
        assert_eq!(field.raw_default(), None);

        let field = FieldDescriptor::new("f", "color").with_default(json!(null));
        assert_eq!(field.raw_default(), None);

        let field = FieldDescriptor::new("f", "color");
        assert_eq!(field.raw_default(), None);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let field = FieldDescriptor::new("my_field", "text");
        assert_eq!(field.label(), "my_field");
    }
}
