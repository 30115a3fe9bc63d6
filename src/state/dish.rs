//! Menu dish types and their wire shapes.

use serde::{Deserialize, Serialize};

/// Server-assigned dish identifier.
pub type DishId = u64;

/// A menu item as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique id, assigned by the server on creation.
    pub id: DishId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Decimal price as typed by the user (never parsed).
    pub price: String,
    /// Whether the dish is currently offered.
    pub available: bool,
    /// Image URL.
    pub image: String,
}

impl Dish {
    /// Returns a copy of this dish with every field present in `patch` overriding ours.
    ///
    /// The id is never part of a patch, so the result always targets the same record.
    #[must_use]
    pub fn merged(&self, patch: DishPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.unwrap_or_else(|| self.price.clone()),
            available: patch.available.unwrap_or(self.available),
            image: patch.image.unwrap_or_else(|| self.image.clone()),
        }
    }
}

/// The fields a user fills in when creating a dish.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// POST body for a new dish: the user input plus the initial availability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDish {
    #[serde(flatten)]
    pub input: DishInput,
    pub available: bool,
}

impl From<DishInput> for NewDish {
    /// New dishes always start out available.
    fn from(input: DishInput) -> Self {
        Self {
            input,
            available: true,
        }
    }
}

/// A partial dish; `None` fields keep the stored value when merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DishPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl DishPatch {
    /// Patch that only flips availability.
    #[must_use]
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}
