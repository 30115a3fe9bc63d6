//! Reusable dashboard widgets.

pub mod dish_item;
pub mod footer;
