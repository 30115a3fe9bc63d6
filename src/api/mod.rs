//! Backend access for the foods resource.
//!
//! The dashboard talks to the backend only through [`FoodsApi`], so the
//! HTTP client can be swapped for an in-memory store in tests.

mod error;
mod http;
#[cfg(test)]
pub mod memory;

pub use error::{ApiError, Result};
pub use http::HttpFoodsApi;

use crate::state::{Dish, DishId, NewDish};

/// CRUD operations against `/foods`.
///
/// Implementations are shared with request worker threads.
pub trait FoodsApi: Send + Sync {
    /// `GET /foods`
    fn list(&self) -> Result<Vec<Dish>>;
    /// `POST /foods`, returning the record with its assigned id.
    fn create(&self, dish: &NewDish) -> Result<Dish>;
    /// `PUT /foods/{id}` with the full record, returning what the server stored.
    fn update(&self, id: DishId, dish: &Dish) -> Result<Dish>;
    /// `DELETE /foods/{id}`; the response body is ignored.
    fn delete(&self, id: DishId) -> Result<()>;
}
