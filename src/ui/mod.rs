mod categories;
mod help;
mod helpers;
mod inputs;
mod submit;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, AppView, FocusMode, StatusKind, TABS};
use helpers::input_height;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Categories => (" Categories ", categories::build_categories_text(app)),
        AppView::Inputs => (" Inputs ", inputs::build_inputs_text(app)),
        AppView::Submit => (" Submit ", submit::build_submit_text(app)),
        AppView::Help => (" Help ", help::build_help_text(app)),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Labelr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "text labeling",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((body_scroll(app), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.new_category_popup {
        render_name_popup(frame, " New Category ", "New category", &popup.name);
    }
    if let Some(popup) = &app.rename_popup {
        render_name_popup(frame, " Rename ", "Rename category", &popup.name);
    }
    if let Some(popup) = &app.confirm_popup {
        render_confirm_popup(frame, popup);
    }
}

/// Keeps the selected list entry near the top once the list outgrows the screen.
fn body_scroll(app: &App) -> u16 {
    let selected = match app.view {
        AppView::Categories => app.selected_category_index,
        AppView::Inputs => app
            .inputs
            .iter()
            .take(app.selected_input_index)
            .map(|input| {
                input_height(&input.input_data, app.expanded_inputs.contains(&input.id))
            })
            .sum(),
        _ => 0,
    };
    selected.saturating_sub(8).min(u16::MAX as usize) as u16
}

fn render_name_popup(frame: &mut Frame, title: &'static str, heading: &'static str, name: &str) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Theme::dim())),
            Span::styled(
                name,
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Type to edit. Enter: save. Esc: cancel.",
            Style::default().fg(Theme::dim()),
        )),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(title),
        );
    frame.render_widget(popup_widget, area);
}

fn render_confirm_popup(frame: &mut Frame, popup: &crate::app::ConfirmPopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Confirm Action",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            popup.message.as_str(),
            Style::default().fg(Theme::text()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Theme::dim())),
            Span::styled("Y", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(" to confirm or ", Style::default().fg(Theme::dim())),
            Span::styled("N", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
            Span::styled("/", Style::default().fg(Theme::dim())),
            Span::styled("ESC", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(" to cancel", Style::default().fg(Theme::dim())),
        ]),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Confirm "),
        );
    frame.render_widget(popup_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn tabs_line(app: &App) -> Line<'_> {
    let names = ["Categories", "Inputs", "Submit"];

    let mut spans = Vec::new();
    for (index, (name, view)) in names.iter().zip(TABS.iter()).enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = *view == app.view;
        let focused = app.focus_mode == FocusMode::TabBar && app.selected_tab_index == index;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Theme::success(),
            StatusKind::Error => Theme::error(),
        };
        return Line::from(Span::styled(
            status.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let synced = app
        .last_synced
        .map(|at| format!("synced {}", at.format("%H:%M:%S")))
        .unwrap_or_else(|| "not synced".to_string());
    Line::from(vec![
        Span::styled("● ", Style::default().fg(Theme::success())),
        Span::styled(
            format!("{} categories", app.categories.len()),
            Style::default().fg(Theme::accent()),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{} inputs", app.inputs.len()),
            Style::default().fg(Theme::accent()),
        ),
        Span::styled(format!("  {synced}"), Style::default().fg(Theme::dim())),
    ])
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let focus_hint = if app.focus_mode == FocusMode::TabBar {
        "Tab: Switch to content  ←/→: Navigate tabs  Enter: Select"
    } else {
        "Tab: Switch to tab bar  c/i/s: Quick nav"
    };

    let (primary, secondary) = match app.view {
        AppView::Categories => (
            "Up/Down: Select  n: New  e: Rename  d: Remove",
            "r: Refresh  ?: Help  q: Quit",
        ),
        AppView::Inputs => (
            "Up/Down: Select  Enter: Read more/less  d: Remove",
            "r: Refresh  ?: Help  q: Quit",
        ),
        AppView::Submit => (
            "Enter: Edit/Submit  Shift+Tab: Text/CSV",
            "esc: Back  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(
            focus_hint,
            Style::default().fg(Theme::highlight()),
        )),
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
