use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(_app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Toggle focus (tab bar / content)",
        "Left/Right: Navigate tabs (tab bar focus)",
        "Enter: Activate tab (tab bar focus)",
        "c/i/s: Categories / Inputs / Submit",
        "r: Refresh current view",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Categories"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "n or Enter: New category (code and color are assigned)",
        "e: Rename selected",
        "d: Remove selected",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Inputs"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "Enter: Read more / read less",
        "d: Remove selected",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Submit"));
    lines.extend(section_lines(&[
        "Shift+Tab: Switch between Text and CSV",
        "Enter: Start editing, Enter again to submit",
        "esc: Stop editing",
    ]));

    Text::from(lines)
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(entries: &[&'static str]) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|entry| {
            Line::from(Span::styled(
                format!("  {entry}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
