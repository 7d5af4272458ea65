//! Theme and styling definitions
//!
//! Centralizes every color and style the form view uses.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_title: Color,
    pub header_version: Color,
    pub header_read_only: Color,

    // Field list colors
    pub field_label: Color,
    pub field_type: Color,
    pub field_value: Color,
    pub field_selected: Color,
    pub field_selected_bg: Color,
    pub field_description: Color,
    pub field_loading: Color,
    pub field_unsupported: Color,

    // Swatch markers
    pub swatch_marker: Color,
    pub swatch_cursor: Color,

    // Input colors
    pub input_prompt: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Header colors
            header_title: Color::Cyan,
            header_version: Color::Gray,
            header_read_only: Color::Red,

            // Field list colors
            field_label: Color::Cyan,
            field_type: Color::DarkGray,
            field_value: Color::White,
            field_selected: Color::Blue,
            field_selected_bg: Color::DarkGray,
            field_description: Color::Gray,
            field_loading: Color::DarkGray,
            field_unsupported: Color::Yellow,

            swatch_marker: Color::White,
            swatch_cursor: Color::Yellow,

            input_prompt: Color::Yellow,

            status_success: Color::Green,
            status_error: Color::Red,

            footer_key: Color::Yellow,
            footer_text: Color::White,
        }
    }
}

impl Theme {
    pub fn header_title_style(&self) -> Style {
        Style::default()
            .fg(self.header_title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_read_only_style(&self) -> Style {
        Style::default()
            .fg(self.header_read_only)
            .add_modifier(Modifier::BOLD)
    }

    pub fn field_label_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.field_selected)
                .bg(self.field_selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.field_label)
        }
    }

    pub fn field_unsupported_style(&self) -> Style {
        Style::default()
            .fg(self.field_unsupported)
            .add_modifier(Modifier::ITALIC)
    }

    /// Cell painted with a color value
    pub fn swatch_style(&self, rgb: [u8; 3]) -> Style {
        Style::default().bg(Color::Rgb(rgb[0], rgb[1], rgb[2]))
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn status_style(&self, is_error: bool) -> Style {
        Style::default()
            .fg(if is_error {
                self.status_error
            } else {
                self.status_success
            })
            .add_modifier(Modifier::BOLD)
    }
}
