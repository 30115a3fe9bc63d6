//! Add/edit dish modal.

use super::modal;
use crate::constants;
use crate::message::ModalKind;
use crate::state::{DishForm, FormField};
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 64;
/// Four bordered inputs plus the status line and frame.
const FORM_HEIGHT: u16 = 4 * 3 + 1 + 2;

/// Render the dish form inside a modal frame
pub fn render(frame: &mut Frame, form: &DishForm, title: &str, kind: ModalKind) {
    let submit_label = match kind {
        ModalKind::Add => constants::LABEL_SUBMIT_ADD,
        ModalKind::Edit => constants::LABEL_SUBMIT_EDIT,
    };
    let inner = modal::render_frame(
        frame,
        title,
        &format!("{submit_label}  [Esc] Cancel"),
        FORM_WIDTH,
        FORM_HEIGHT,
    );

    let mut constraints = vec![Constraint::Length(3); FormField::ALL.len()];
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (field, area) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = form.focused() == *field && !form.is_submitting();
        let value = form.value(*field);

        let border_style = if focused {
            Style::default().fg(theme::BORDER_FOCUSED)
        } else {
            Style::default().fg(theme::BORDER_DEFAULT)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.label()));

        let content = if value.is_empty() && !focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(theme::TEXT_SECONDARY),
            ))
        } else {
            let mut spans = vec![Span::styled(
                value.to_string(),
                Style::default().fg(theme::TEXT_PRIMARY),
            )];
            if focused {
                spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let mut input = Paragraph::new(content).block(block);
        if focused {
            input = input.style(Style::default().bg(theme::INPUT_FOCUSED_BG));
        }
        frame.render_widget(input, *area);
    }

    if form.is_submitting() {
        if let Some(status_area) = rows.last() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    constants::LABEL_SUBMITTING,
                    Style::default().fg(theme::WARNING),
                )))
                .centered(),
                *status_area,
            );
        }
    }
}
