//! Rendering logic for the application
//!
//! Splits the frame into header, field list and footer and hands each area
//! to its view function.

use super::core::FormApp;
use crate::fields::KeyHint;
use crate::tui::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::tui::views::{FooterState, render_footer, render_form, render_header, render_help};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

impl FormApp {
    /// Main render entry point
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        render_header(
            f,
            chunks[0],
            &self.title,
            self.schema.version.as_deref(),
            self.slots.len(),
            self.config.read_only,
            &self.theme,
        );

        let hints = self.selected_hints();
        if self.ui_state.show_help {
            render_help(f, chunks[1], hints, &self.theme);
        } else {
            render_form(
                f,
                chunks[1],
                &self.slots,
                self.selected,
                &self.theme,
                self.config.ui.no_icons,
            );
        }

        let footer = FooterState {
            editing: self.input_state.editing.then_some(self.input_state.buffer.as_str()),
            status_message: self.ui_state.status_message.as_ref(),
            hints,
            read_only: self.config.read_only,
        };
        render_footer(f, chunks[2], &footer, &self.theme);
    }

    /// Key hints from the selected editor's assets
    fn selected_hints(&self) -> &[KeyHint] {
        self.selected_slot()
            .and_then(|slot| slot.assets())
            .map(|assets| assets.hints.as_slice())
            .unwrap_or(&[])
    }
}
