//! Dashboard controller: the single owner of the dish list.
//!
//! Request-building methods return the [`ApiRequest`] to run; the list only
//! changes in [`Dashboard::apply`], once the backend has answered. The list
//! is a cache of server state and is never edited in place: entries are
//! appended, replaced by id, or removed.

use crate::core::worker::{ApiOutcome, ApiRequest, UpdateOrigin};
use crate::message::{ModalKind, Opening};
use crate::state::{Dish, DishId, DishInput, DishPatch, NewDish, ToastType};

/// A user-facing summary of a settled request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: ToastType,
    pub message: String,
}

impl Notice {
    fn new(level: ToastType, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// What [`Dashboard::apply`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub notice: Notice,
    /// Modal closed because its submission settled.
    pub closed: Option<ModalKind>,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    dishes: Vec<Dish>,
    editing: Option<Dish>,
    add_modal_open: bool,
    edit_modal_open: bool,
    /// Counters bumped every time the matching modal is shown.
    add_opening: Opening,
    edit_opening: Opening,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dishes in server order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// The record the edit modal was opened with.
    pub fn editing(&self) -> Option<&Dish> {
        self.editing.as_ref()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Add => self.add_modal_open,
            ModalKind::Edit => self.edit_modal_open,
        }
    }

    /// The current showing of `kind`, or `None` while it is closed.
    pub fn opening(&self, kind: ModalKind) -> Option<Opening> {
        let opening = match kind {
            ModalKind::Add => self.add_opening,
            ModalKind::Edit => self.edit_opening,
        };
        self.is_open(kind).then_some(opening)
    }

    /// Full fetch issued once at startup.
    pub fn initialize(&self) -> ApiRequest {
        ApiRequest::List
    }

    /// Create request; new dishes start out available.
    pub fn add_dish(&self, input: DishInput) -> ApiRequest {
        ApiRequest::Create {
            dish: NewDish::from(input),
            opening: self.opening(ModalKind::Add),
        }
    }

    /// Update request for the dish being edited, with `patch` merged over it.
    ///
    /// Returns `None` when no dish has been selected for editing.
    pub fn update_dish(&self, patch: DishPatch) -> Option<ApiRequest> {
        let editing = self.editing.as_ref()?;
        Some(ApiRequest::Update {
            id: editing.id,
            dish: editing.merged(patch),
            origin: UpdateOrigin::EditForm {
                opening: self.opening(ModalKind::Edit),
            },
        })
    }

    /// Update request flipping one dish's availability.
    pub fn toggle_available(&self, id: DishId) -> Option<ApiRequest> {
        let dish = self.dish(id)?;
        Some(ApiRequest::Update {
            id,
            dish: dish.merged(DishPatch::availability(!dish.available)),
            origin: UpdateOrigin::Availability,
        })
    }

    pub fn delete_dish(&self, id: DishId) -> ApiRequest {
        ApiRequest::Delete(id)
    }

    pub fn select_for_edit(&mut self, dish: Dish) {
        self.editing = Some(dish);
        self.edit_modal_open = true;
        self.edit_opening += 1;
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
        if self.add_modal_open {
            self.add_opening += 1;
        }
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
        if self.edit_modal_open {
            self.edit_opening += 1;
        }
    }

    /// Patches the list with a settled request and closes the modal it came from.
    ///
    /// The modal is only closed while it is still the showing that submitted;
    /// once dismissed or reopened the result just patches the list. Failed
    /// creates and updates leave the list untouched. A delete removes
    /// its entry whether or not the backend confirmed it.
    pub fn apply(&mut self, outcome: ApiOutcome) -> Settled {
        match outcome {
            ApiOutcome::Listed(Ok(dishes)) => {
                tracing::info!(count = dishes.len(), "dish list loaded");
                let notice = Notice::new(
                    ToastType::Info,
                    format!("Loaded {} dish(es)", dishes.len()),
                );
                self.dishes = dishes;
                Settled {
                    notice,
                    closed: None,
                }
            }
            ApiOutcome::Listed(Err(err)) => {
                tracing::error!(error = %err, "failed to load dish list");
                Settled {
                    notice: Notice::new(ToastType::Error, format!("Could not load menu: {err}")),
                    closed: None,
                }
            }
            ApiOutcome::Created {
                name,
                opening,
                result,
            } => {
                let notice = match result {
                    Ok(dish) => {
                        tracing::info!(id = dish.id, name = %dish.name, "dish added");
                        let notice =
                            Notice::new(ToastType::Success, format!("Added: {}", dish.name));
                        self.dishes.push(dish);
                        notice
                    }
                    Err(err) => {
                        tracing::error!(name = %name, error = %err, "failed to add dish");
                        Notice::new(ToastType::Error, format!("Could not add {name}: {err}"))
                    }
                };
                Settled {
                    notice,
                    closed: self.close(ModalKind::Add, opening),
                }
            }
            ApiOutcome::Updated { id, origin, result } => {
                let notice = match result {
                    Ok(dish) => {
                        tracing::info!(id = dish.id, ?origin, "dish updated");
                        let notice = match origin {
                            UpdateOrigin::EditForm { .. } => {
                                Notice::new(ToastType::Success, format!("Saved: {}", dish.name))
                            }
                            UpdateOrigin::Availability => Notice::new(
                                ToastType::Success,
                                format!(
                                    "{} is now {}",
                                    dish.name,
                                    if dish.available { "available" } else { "unavailable" }
                                ),
                            ),
                        };
                        self.replace(dish);
                        notice
                    }
                    Err(err) => {
                        tracing::error!(id, ?origin, error = %err, "failed to update dish");
                        Notice::new(
                            ToastType::Error,
                            format!("Could not update dish #{id}: {err}"),
                        )
                    }
                };
                let closed = match origin {
                    UpdateOrigin::EditForm { opening } => self.close(ModalKind::Edit, opening),
                    UpdateOrigin::Availability => None,
                };
                Settled { notice, closed }
            }
            ApiOutcome::Deleted { id, result } => {
                let notice = match result {
                    Ok(()) => {
                        tracing::info!(id, "dish deleted");
                        Notice::new(ToastType::Success, format!("Deleted dish #{id}"))
                    }
                    Err(err) => {
                        tracing::warn!(id, error = %err, "delete failed, removing locally anyway");
                        Notice::new(
                            ToastType::Warning,
                            format!("Delete of dish #{id} failed ({err}); removed from list"),
                        )
                    }
                };
                self.dishes.retain(|d| d.id != id);
                Settled {
                    notice,
                    closed: None,
                }
            }
        }
    }

    fn replace(&mut self, dish: Dish) {
        if let Some(slot) = self.dishes.iter_mut().find(|d| d.id == dish.id) {
            *slot = dish;
        }
    }

    fn close(&mut self, kind: ModalKind, opening: Option<Opening>) -> Option<ModalKind> {
        if opening.is_none() || opening != self.opening(kind) {
            return None;
        }
        let open = match kind {
            ModalKind::Add => &mut self.add_modal_open,
            ModalKind::Edit => &mut self.edit_modal_open,
        };
        std::mem::replace(open, false).then_some(kind)
    }
}
