//! Overlays drawn above the dashboard.

pub mod dish_form;
pub mod modal;
pub mod toast;
