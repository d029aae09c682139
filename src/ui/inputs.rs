use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{badge, needs_read_more, preview};
use super::theme::Theme;
use crate::app::App;

pub fn build_inputs_text(app: &App) -> Text<'_> {
    if let Some(error) = &app.inputs_error {
        return Text::from(Span::styled(
            error.as_str(),
            Style::default().fg(Theme::error()),
        ));
    }
    if app.last_synced.is_none() {
        return Text::from("Loading...");
    }
    if app.inputs.is_empty() {
        return Text::from("Nothing submitted yet. Press 's' to submit text.");
    }

    let mut lines = Vec::new();
    for (index, input) in app.inputs.iter().enumerate() {
        let selected = index == app.selected_input_index;
        let expanded = app.expanded_inputs.contains(&input.id);
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };

        let mut header = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(format!("#{:<5}", input.id), Style::default().fg(Theme::accent())),
        ];
        for category in &input.categories {
            header.push(badge(category));
            header.push(Span::raw(" "));
        }
        lines.push(Line::from(header));

        for text_line in preview(&input.input_data, expanded).lines() {
            lines.push(Line::from(Span::styled(
                format!("    {text_line}"),
                Style::default().fg(Theme::text()),
            )));
        }
        if needs_read_more(&input.input_data) {
            lines.push(Line::from(Span::styled(
                if expanded { "    Read less" } else { "    Read more" },
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }
        lines.push(Line::from(""));
    }

    Text::from(lines)
}
