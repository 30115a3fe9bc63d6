//! Main dashboard view: header, dish list, activity log and footer.

use super::widgets::{dish_item, footer};
use crate::app::App;
use crate::constants;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, activity, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(constants::LOG_PANEL_HEIGHT + 2),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header);
    render_list(frame, app, body);
    render_activity(frame, app, activity);
    footer::render(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let available = app
        .dashboard
        .dishes()
        .iter()
        .filter(|d| d.available)
        .count();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} dishes, {available} available",
                app.dashboard.dishes().len()
            ),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
        Span::styled(
            format!("  @ {}", app.api_url),
            Style::default().fg(theme::TEXT_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(constants::TITLE_MENU);

    if app.dashboard.dishes().is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            constants::MSG_EMPTY_MENU,
            Style::default().fg(theme::TEXT_SECONDARY),
        )))
        .centered()
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .dashboard
        .dishes()
        .iter()
        .map(dish_item::list_item)
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(constants::TITLE_ACTIVITY);

    let visible = block.inner(area).height as usize;
    let skip = app.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = app
        .logs
        .iter()
        .skip(skip)
        .map(|entry| Line::from(Span::styled(entry.as_str(), log_style(entry))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Colour activity lines by their level prefix.
fn log_style(entry: &str) -> Style {
    let color = if entry.starts_with("ERROR") {
        theme::ERROR
    } else if entry.starts_with("WARN") {
        theme::WARNING
    } else if entry.starts_with("SUCCESS") {
        theme::SUCCESS
    } else {
        theme::TEXT_SECONDARY
    };
    Style::default().fg(color)
}
