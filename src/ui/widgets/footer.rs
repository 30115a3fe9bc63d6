//! Footer widget with context-aware keybinding hints

use crate::app::App;
use crate::message::ModalKind;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render dashboard footer with shortcuts for the current mode
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // An open modal owns the keyboard
    if app.dashboard.is_open(ModalKind::Add) || app.dashboard.is_open(ModalKind::Edit) {
        let hints = [
            ("Tab", "Next"),
            ("S-Tab", "Prev"),
            ("^U", "Clear"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ];
        render_hints(frame, area, &hints);
        return;
    }

    let mut hints = vec![("a", "Add")];

    // Row actions only make sense with a selection
    if app.selected_dish().is_some() {
        hints.extend_from_slice(&[
            ("↑↓", "Select"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("Space", "Availability"),
        ]);
    }

    hints.push(("q", "Quit"));

    render_hints(frame, area, &hints);
}

/// Columns taken by one hint, counting the " │ " separator before every hint
/// but the first.
fn hint_width(index: usize, key: &str, action: &str) -> usize {
    let sep_width = if index > 0 { 3 } else { 0 };
    key.chars().count() + 1 + action.chars().count() + sep_width
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),     // Hints (left)
        Constraint::Length(18), // Branding (right)
    ])
    .split(area);

    let mut hint_spans = vec![Span::raw(" ")];
    let mut current_width = 1;
    let max_width = chunks[0].width as usize;

    for (i, (key, action)) in hints.iter().enumerate() {
        let item_width = hint_width(i, key, action);

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    let branding = Line::from(Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::TEXT_SECONDARY),
    ));
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
