//! Text buffers behind the add and edit dish modals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::dish::{Dish, DishInput, DishPatch};

/// One input of the dish form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Image,
    Name,
    Price,
    Description,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [FormField; 4] = [
        FormField::Image,
        FormField::Name,
        FormField::Price,
        FormField::Description,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FormField::Image => "Image URL",
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::Image => "Paste the link here",
            FormField::Name => "Ex: Italian style",
            FormField::Price => "Ex: 19.90",
            FormField::Description => "Description",
        }
    }

    const fn index(self) -> usize {
        match self {
            FormField::Image => 0,
            FormField::Name => 1,
            FormField::Price => 2,
            FormField::Description => 3,
        }
    }
}

/// What a key press did to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing.
    Editing,
    /// User asked to submit the current values.
    Submit,
    /// User dismissed the modal.
    Dismiss,
}

/// Editable state of a dish modal.
#[derive(Clone, Debug, Default)]
pub struct DishForm {
    values: [String; 4],
    focused: usize,
    submitting: bool,
}

impl DishForm {
    /// A blank form, focused on the first field.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing dish.
    pub fn seeded(dish: &Dish) -> Self {
        let mut form = Self::default();
        form.values[FormField::Image.index()].clone_from(&dish.image);
        form.values[FormField::Name.index()].clone_from(&dish.name);
        form.values[FormField::Price.index()].clone_from(&dish.price);
        form.values[FormField::Description.index()].clone_from(&dish.description);
        form
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    /// True while a submission is waiting on the backend.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn mark_submitting(&mut self) {
        self.submitting = true;
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Applies a key press. Input is ignored while submitting, except dismissal.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.code == KeyCode::Esc {
            return FormAction::Dismiss;
        }
        if self.submitting {
            return FormAction::Editing;
        }

        match key.code {
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Backspace => {
                self.values[self.focused].pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[self.focused].clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[self.focused].push(c);
            }
            _ => {}
        }
        FormAction::Editing
    }

    /// Values collected for a create request.
    pub fn to_input(&self) -> DishInput {
        DishInput {
            name: self.value(FormField::Name).to_string(),
            description: self.value(FormField::Description).to_string(),
            price: self.value(FormField::Price).to_string(),
            image: self.value(FormField::Image).to_string(),
        }
    }

    /// The submitted text fields; availability is left to the stored record.
    pub fn to_patch(&self) -> DishPatch {
        DishPatch {
            name: Some(self.value(FormField::Name).to_string()),
            description: Some(self.value(FormField::Description).to_string()),
            price: Some(self.value(FormField::Price).to_string()),
            available: None,
            image: Some(self.value(FormField::Image).to_string()),
        }
    }
}
