use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{badge, to_color};
use super::theme::Theme;
use crate::app::App;

pub fn build_categories_text(app: &App) -> Text<'_> {
    if app.categories.is_empty() {
        return Text::from("No categories yet. Press 'n' to create one.");
    }

    let lines = app
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let selected = index == app.selected_category_index;
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::selection_marker())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let mut name_style = Style::default().fg(Theme::text());
            if selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            let swatch_style = to_color(&category.color)
                .map(|color| Style::default().fg(color))
                .unwrap_or_else(|| Style::default().fg(Theme::dim()));
            Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                badge(category),
                Span::raw(" "),
                Span::styled(category.name.as_str(), name_style),
                Span::raw("  "),
                Span::styled(category.color.as_str(), swatch_style),
            ])
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
