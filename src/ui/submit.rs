use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::{App, SubmitTab};

pub fn build_submit_text(app: &App) -> Text<'_> {
    let tab_style = |active: bool| {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Text ", tab_style(app.submit_tab == SubmitTab::Text)),
            Span::raw("  "),
            Span::styled(" CSV ", tab_style(app.submit_tab == SubmitTab::Csv)),
        ]),
        Line::from(""),
    ];

    let (label, value, placeholder) = match app.submit_tab {
        SubmitTab::Text => ("Text: ", app.text_input.as_str(), "Enter your text here..."),
        SubmitTab::Csv => ("CSV file: ", app.csv_path.as_str(), "path/to/file.csv"),
    };
    let value_span = if value.is_empty() && !app.submit_editing {
        Span::styled(placeholder, Style::default().fg(Theme::dim()))
    } else {
        let mut style = Style::default().fg(Theme::text());
        if app.submit_editing {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(value, style)
    };
    let mut field = vec![
        Span::styled(label, Style::default().fg(Theme::dim())),
        value_span,
    ];
    if app.submit_editing {
        field.push(Span::styled(
            "▏",
            Style::default().fg(Theme::highlight()),
        ));
    }
    lines.push(Line::from(field));
    lines.push(Line::from(""));

    let hint = if app.submit_editing {
        "Type to edit. Enter: submit. Esc: stop editing."
    } else {
        "Enter: start editing. Shift+Tab: switch Text/CSV."
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Theme::dim()))));

    Text::from(lines)
}
