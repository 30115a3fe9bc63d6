//! Generic modal shell: clears a centered area and draws a titled frame.

use crate::theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Draws the modal frame and returns the inner area for its content.
pub fn render_frame(frame: &mut Frame, title: &str, footer: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(format!(" {footer} ")).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Centered rectangle of fixed size, shrunk to fit `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(width.min(area.width))]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
