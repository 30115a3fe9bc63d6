//! Application state types.

mod dish;
mod form;
mod toast;

pub use dish::{Dish, DishId, DishInput, DishPatch, NewDish};
pub use form::{DishForm, FormAction, FormField};
pub use toast::{Toast, ToastType};
