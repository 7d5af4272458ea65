//! Field list rendering

use crate::fields::{ColorView, EditorView, FieldSlot, SlotView};
use crate::tui::constants::SWATCH_WIDTH;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render every field slot in schema order
///
/// A slot still waiting on its assets draws as an empty line.
pub fn render_form(
    f: &mut Frame,
    area: Rect,
    slots: &[FieldSlot],
    selected: usize,
    theme: &Theme,
    no_icons: bool,
) {
    let block = Block::default().borders(Borders::ALL).title(" Fields ");

    if slots.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Schema has no fields",
            Style::default().fg(theme.field_description),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_range = (0, 0);

    for (index, slot) in slots.iter().enumerate() {
        let is_selected = index == selected;
        let start = lines.len();
        lines.extend(slot_lines(slot, is_selected, theme, no_icons));
        if is_selected {
            selected_range = (start, lines.len());
        }
        lines.push(Line::from(""));
    }

    // Keep the selected field inside the viewport
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = selected_range.1.saturating_sub(visible).min(selected_range.0);

    let form = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(form, area);
}

fn slot_lines<'a>(
    slot: &'a FieldSlot,
    is_selected: bool,
    theme: &Theme,
    no_icons: bool,
) -> Vec<Line<'a>> {
    let descriptor = slot.descriptor();
    let marker = match (is_selected, no_icons) {
        (true, false) => "▶ ",
        (true, true) => "> ",
        (false, _) => "  ",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, theme.field_label_style(is_selected)),
        Span::styled(descriptor.label(), theme.field_label_style(is_selected)),
        Span::styled(
            format!("  ({})", descriptor.type_name),
            Style::default().fg(theme.field_type),
        ),
    ])];

    match slot.view() {
        SlotView::Loading => lines.push(Line::from("")),
        SlotView::Unsupported(text) => lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(text, theme.field_unsupported_style()),
        ])),
        SlotView::Editor(EditorView::Color(view)) => {
            lines.extend(color_lines(view, theme, no_icons))
        }
        SlotView::Editor(EditorView::Toggle { on }) => {
            let (icon, label) = match (on, no_icons) {
                (true, false) => ("●", "on"),
                (false, false) => ("○", "off"),
                (true, true) => ("[x]", "on"),
                (false, true) => ("[ ]", "off"),
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{} {}", icon, label),
                    Style::default().fg(theme.field_value),
                ),
            ]));
        }
        SlotView::Editor(EditorView::Value { value, .. }) => lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(value, Style::default().fg(theme.field_value)),
        ])),
    }

    if let Some(description) = &descriptor.description {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                description.as_str(),
                Style::default()
                    .fg(theme.field_description)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

/// Current color preview followed by the palette row
fn color_lines(view: ColorView, theme: &Theme, no_icons: bool) -> Vec<Line<'static>> {
    let blank = " ".repeat(SWATCH_WIDTH);

    let mut preview = vec![Span::raw("    ")];
    if let Some(rgb) = view.rgb {
        preview.push(Span::styled(blank.clone(), theme.swatch_style(rgb)));
        preview.push(Span::raw(" "));
    }
    preview.push(Span::styled(view.value, Style::default().fg(theme.field_value)));

    let mut lines = vec![Line::from(preview)];
    if view.swatches.is_empty() {
        return lines;
    }

    let mut row = vec![Span::raw("    ")];
    for swatch in view.swatches {
        let (open, close) = if swatch.focused { ("[", "]") } else { (" ", " ") };
        row.push(Span::styled(open, Style::default().fg(theme.swatch_cursor)));

        let fill = if swatch.selected {
            let mark = if no_icons { "*" } else { "✓" };
            format!("{:^width$}", mark, width = SWATCH_WIDTH)
        } else {
            blank.clone()
        };
        let style = match swatch.rgb {
            Some(rgb) => theme.swatch_style(rgb).fg(theme.swatch_marker),
            None => Style::default().fg(theme.swatch_marker),
        };
        row.push(Span::styled(fill, style));
        row.push(Span::styled(close, Style::default().fg(theme.swatch_cursor)));
    }
    lines.push(Line::from(row));

    lines
}
