//! UI rendering module

mod dashboard;
mod overlays;
mod widgets;

use crate::app::App;
use crate::constants;
use crate::message::ModalKind;
use ratatui::Frame;

/// Main render function - base view, then whichever modal is open, then the toast
pub fn render(frame: &mut Frame, app: &mut App) {
    dashboard::render(frame, app);

    if app.dashboard.is_open(ModalKind::Add) {
        overlays::dish_form::render(frame, &app.add_form, constants::TITLE_ADD_DISH, ModalKind::Add);
    } else if app.dashboard.is_open(ModalKind::Edit) {
        let title = match app.dashboard.editing() {
            Some(dish) => format!("{} #{}", constants::TITLE_EDIT_DISH, dish.id),
            None => constants::TITLE_EDIT_DISH.to_string(),
        };
        overlays::dish_form::render(frame, &app.edit_form, &title, ModalKind::Edit);
    }

    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}
