//! Header view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header with the form title, schema version and field count
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    title: &str,
    version: Option<&str>,
    field_count: usize,
    read_only: bool,
    theme: &Theme,
) {
    let mut spans = vec![Span::styled(title.to_string(), theme.header_title_style())];

    if let Some(version) = version {
        spans.push(Span::styled(
            format!("  v{}", version),
            Style::default().fg(theme.header_version),
        ));
    }

    spans.push(Span::raw(format!(
        "  {} field{}",
        field_count,
        if field_count == 1 { "" } else { "s" }
    )));

    if read_only {
        spans.push(Span::styled("  [READ-ONLY]", theme.header_read_only_style()));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}
