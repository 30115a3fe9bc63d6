//! Typed commands emitted by the list and the modal forms.
//!
//! Components never touch the dish list; they produce a [`Message`] and the
//! application shell routes it to the dashboard controller.

use crate::state::{DishId, DishInput, DishPatch};

/// Identifies one of the two dish modals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit,
}

/// Sequence number of one showing of a modal. Reopening a modal gives it a
/// new number, so a late result can tell whether its form is still on screen.
pub type Opening = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Header "new dish" action.
    AddRequested,
    /// List item "edit" action.
    EditRequested(DishId),
    /// List item "delete" action.
    DeleteRequested(DishId),
    /// List item availability switch.
    ToggleAvailability(DishId),
    /// Add form submitted.
    SubmitAdd(DishInput),
    /// Edit form submitted with the fields it carries.
    SubmitEdit(DishPatch),
    /// Modal closed without submitting.
    Dismiss(ModalKind),
    Quit,
}
