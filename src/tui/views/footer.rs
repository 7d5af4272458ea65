//! Footer view rendering

use crate::fields::KeyHint;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Everything the footer needs to pick its content
pub struct FooterState<'a> {
    /// Text typed so far, when entering a value
    pub editing: Option<&'a str>,
    /// Status message (message, is_error)
    pub status_message: Option<&'a (String, bool)>,
    /// Hints for the selected editor
    pub hints: &'a [KeyHint],
    pub read_only: bool,
}

/// Render the footer based on current application state
pub fn render_footer(f: &mut Frame, area: Rect, state: &FooterState, theme: &Theme) {
    let spans: Vec<Span> = if let Some(buffer) = state.editing {
        vec![
            Span::styled("value> ", Style::default().fg(theme.input_prompt)),
            Span::raw(buffer.to_string()),
            Span::styled("_", theme.footer_key_style()),
        ]
    } else if let Some((message, is_error)) = state.status_message {
        vec![Span::styled(message.clone(), theme.status_style(*is_error))]
    } else {
        navigation_spans(state, theme)
    };

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

fn navigation_spans<'a>(state: &FooterState<'a>, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut push = |key: &'a str, action: &'a str| {
        if !spans.is_empty() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(key, theme.footer_key_style()));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(theme.footer_text),
        ));
    };

    push("j/k", "Move");
    if !state.read_only {
        for hint in state.hints {
            push(hint.key, hint.action);
        }
    }
    push("?", "Help");
    push("q", "Quit");
    spans
}
