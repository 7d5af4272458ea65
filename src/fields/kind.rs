//! Field kind definitions
//!
//! The closed set of field types the form knows how to edit. Schemas are
//! open-ended, so parsing a type tag can fail; callers treat that as the
//! "unsupported type" case rather than an error.

use std::fmt;
use std::str::FromStr;

/// Enumeration of all registered field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    DateTime,
    Dropdown,
    Location,
    LocationBased,
    OAuth2,
    Png,
    Text,
    OnOff,
    Toggle,
    Typeahead,
    Color,
}

impl FieldKind {
    /// The schema type tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::DateTime => "datetime",
            FieldKind::Dropdown => "dropdown",
            FieldKind::Location => "location",
            FieldKind::LocationBased => "locationbased",
            FieldKind::OAuth2 => "oauth2",
            FieldKind::Png => "png",
            FieldKind::Text => "text",
            FieldKind::OnOff => "onoff",
            FieldKind::Toggle => "toggle",
            FieldKind::Typeahead => "typeahead",
            FieldKind::Color => "color",
        }
    }

    /// Human readable editor name
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::DateTime => "Date & Time",
            FieldKind::Dropdown => "Dropdown",
            FieldKind::Location => "Location",
            FieldKind::LocationBased => "Location Based",
            FieldKind::OAuth2 => "OAuth2",
            FieldKind::Png => "Photo",
            FieldKind::Text => "Text",
            FieldKind::OnOff | FieldKind::Toggle => "Toggle",
            FieldKind::Typeahead => "Typeahead",
            FieldKind::Color => "Color",
        }
    }

    /// Try to parse a type tag, returning None if it is not registered
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all registered field kinds
    pub fn all() -> &'static [Self] {
        &[
            FieldKind::DateTime,
            FieldKind::Dropdown,
            FieldKind::Location,
            FieldKind::LocationBased,
            FieldKind::OAuth2,
            FieldKind::Png,
            FieldKind::Text,
            FieldKind::OnOff,
            FieldKind::Toggle,
            FieldKind::Typeahead,
            FieldKind::Color,
        ]
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "datetime" => Ok(FieldKind::DateTime),
            "dropdown" => Ok(FieldKind::Dropdown),
            "location" => Ok(FieldKind::Location),
            "locationbased" => Ok(FieldKind::LocationBased),
            "oauth2" => Ok(FieldKind::OAuth2),
            "png" => Ok(FieldKind::Png),
            "text" => Ok(FieldKind::Text),
            "onoff" => Ok(FieldKind::OnOff),
            "toggle" => Ok(FieldKind::Toggle),
            "typeahead" => Ok(FieldKind::Typeahead),
            "color" => Ok(FieldKind::Color),
            _ => Err(format!("Unknown field type: {}", s)),
        }
    }
}
