//! Background execution of backend requests.
//!
//! Every request runs on its own short-lived thread and reports back through
//! the event channel, so the UI keeps handling input while a call is
//! outstanding. Requests are neither cancellable nor ordered: two in-flight
//! requests settle in whatever order the backend answers them.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{ApiError, FoodsApi};
use crate::event::Event;
use crate::message::Opening;
use crate::state::{Dish, DishId, NewDish};

/// Which user action produced an update request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOrigin {
    /// Submitted from the edit modal; `opening` is the showing it came from.
    EditForm { opening: Option<Opening> },
    /// Availability toggle on a list item.
    Availability,
}

/// A backend call the dashboard wants made.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    List,
    Create {
        dish: NewDish,
        /// Add modal showing that submitted the dish.
        opening: Option<Opening>,
    },
    Update {
        id: DishId,
        dish: Dish,
        origin: UpdateOrigin,
    },
    Delete(DishId),
}

/// The settled result of an [`ApiRequest`], carrying the ids it was issued with.
#[derive(Debug)]
pub enum ApiOutcome {
    Listed(Result<Vec<Dish>, ApiError>),
    Created {
        name: String,
        opening: Option<Opening>,
        result: Result<Dish, ApiError>,
    },
    Updated {
        id: DishId,
        origin: UpdateOrigin,
        result: Result<Dish, ApiError>,
    },
    Deleted {
        id: DishId,
        result: Result<(), ApiError>,
    },
}

impl ApiRequest {
    /// Runs the request to completion on the calling thread.
    pub fn execute(self, api: &dyn FoodsApi) -> ApiOutcome {
        match self {
            ApiRequest::List => ApiOutcome::Listed(api.list()),
            ApiRequest::Create { dish, opening } => ApiOutcome::Created {
                result: api.create(&dish),
                name: dish.input.name,
                opening,
            },
            ApiRequest::Update { id, dish, origin } => ApiOutcome::Updated {
                id,
                origin,
                result: api.update(id, &dish),
            },
            ApiRequest::Delete(id) => ApiOutcome::Deleted {
                id,
                result: api.delete(id),
            },
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            ApiRequest::List => "GET /foods".to_string(),
            ApiRequest::Create { dish, .. } => format!("POST /foods ({})", dish.input.name),
            ApiRequest::Update { id, .. } => format!("PUT /foods/{id}"),
            ApiRequest::Delete(id) => format!("DELETE /foods/{id}"),
        }
    }
}

/// Executes `request` on a background thread and sends the outcome as [`Event::Api`].
///
/// If the event loop has already shut down the outcome is dropped.
pub fn spawn_request(api: Arc<dyn FoodsApi>, request: ApiRequest, tx: Sender<Event>) {
    thread::spawn(move || {
        let label = request.describe();
        tracing::debug!(request = %label, "request started");
        let outcome = request.execute(api.as_ref());
        if tx.send(Event::Api(outcome)).is_err() {
            tracing::debug!(request = %label, "event loop gone, outcome dropped");
        }
    });
}
