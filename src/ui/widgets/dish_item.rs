//! One row of the dish list.

use crate::constants;
use crate::state::Dish;
use crate::theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Renders a dish as a three-line list entry: header, description, image URL.
pub fn list_item(dish: &Dish) -> ListItem<'static> {
    let (badge, badge_style) = if dish.available {
        (
            format!("● {}", constants::LABEL_AVAILABLE),
            Style::default().fg(theme::SUCCESS),
        )
    } else {
        (
            format!("○ {}", constants::LABEL_UNAVAILABLE),
            Style::default().fg(theme::ERROR),
        )
    };

    let name_style = if dish.available {
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
    };

    let header = Line::from(vec![
        Span::styled(
            format!("#{:<4}", dish.id),
            Style::default().fg(theme::TEXT_SECONDARY),
        ),
        Span::styled(dish.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(
            format!("$ {}", dish.price),
            Style::default().fg(theme::PRICE),
        ),
        Span::raw("  "),
        Span::styled(badge, badge_style),
    ]);

    let description = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            dish.description.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
    ]);

    let image = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            dish.image.clone(),
            Style::default()
                .fg(theme::TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    ListItem::new(vec![header, description, image])
}
