//! Key reference overlay

use crate::fields::KeyHint;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const GLOBAL_HINTS: &[(&str, &str)] = &[
    ("j/k", "Move between fields"),
    ("Enter", "Confirm typed value"),
    ("Esc", "Cancel typing / close help"),
    ("?", "Toggle this help"),
    ("q", "Quit and write values"),
];

/// Render global keys plus the selected editor's hints
pub fn render_help(f: &mut Frame, area: Rect, editor_hints: &[KeyHint], theme: &Theme) {
    let mut lines: Vec<Line> = GLOBAL_HINTS
        .iter()
        .map(|(key, action)| help_line(key, action, theme))
        .collect();

    if !editor_hints.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Field", theme.header_title_style())));
        lines.extend(
            editor_hints
                .iter()
                .map(|hint| help_line(hint.key, hint.action, theme)),
        );
    }

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(help, area);
}

fn help_line<'a>(key: &'a str, action: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), theme.footer_key_style()),
        Span::raw("  "),
        Span::raw(action),
    ])
}
