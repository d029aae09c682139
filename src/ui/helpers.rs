use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::color::parse_rgb;
use crate::types::Category;

/// Inputs longer than this many characters are collapsed behind "Read more".
pub const READ_MORE_LIMIT: usize = 150;

pub fn to_color(value: &str) -> Option<Color> {
    parse_rgb(value).ok().map(|(r, g, b)| Color::Rgb(r, g, b))
}

/// The category code in white on the category's color.
pub fn badge(category: &Category) -> Span<'_> {
    let bg = to_color(&category.color).unwrap_or(Color::DarkGray);
    Span::styled(
        format!(" {} ", category.code),
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn needs_read_more(text: &str) -> bool {
    text.chars().count() > READ_MORE_LIMIT
}

/// Full text when expanded, otherwise the first `READ_MORE_LIMIT` chars plus an ellipsis.
pub fn preview(text: &str, expanded: bool) -> String {
    if expanded || !needs_read_more(text) {
        return text.to_string();
    }
    let mut trimmed = text.chars().take(READ_MORE_LIMIT).collect::<String>();
    trimmed.push('…');
    trimmed
}

/// Rows an input occupies in the Inputs view: header, preview, optional
/// read-more toggle and the blank separator.
pub fn input_height(text: &str, expanded: bool) -> usize {
    let toggle = usize::from(needs_read_more(text));
    1 + preview(text, expanded).lines().count() + toggle + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let text = "a".repeat(READ_MORE_LIMIT);
        assert!(!needs_read_more(&text));
        assert_eq!(preview(&text, false), text);
    }

    #[test]
    fn long_text_collapses_on_char_boundary() {
        let text = "é".repeat(READ_MORE_LIMIT + 10);
        assert!(needs_read_more(&text));
        let collapsed = preview(&text, false);
        assert_eq!(collapsed.chars().count(), READ_MORE_LIMIT + 1);
        assert!(collapsed.ends_with('…'));
        assert_eq!(preview(&text, true), text);
    }

    #[test]
    fn collapsed_height_ignores_hidden_lines() {
        let long = "line\n".repeat(80);
        assert!(needs_read_more(&long));
        // header, 30 kept lines, the ellipsis line, "Read more", blank
        assert_eq!(input_height(&long, false), 34);
        assert_eq!(input_height(&long, true), 83);
        assert_eq!(input_height("short", false), 3);
    }

    #[test]
    fn badge_falls_back_for_unknown_color() {
        let category = Category {
            id: Some(1),
            name: "Other".to_string(),
            code: "A00".to_string(),
            color: "not-a-color".to_string(),
        };
        assert_eq!(badge(&category).style.bg, Some(Color::DarkGray));
        assert_eq!(to_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }
}
