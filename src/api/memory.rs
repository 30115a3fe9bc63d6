//! In-memory foods backend for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{ApiError, FoodsApi, Result};
use crate::state::{Dish, DishId, NewDish};

/// Behaves like a json-server `/foods` collection: sequential ids, echoing writes.
#[derive(Default)]
pub struct MemoryFoodsApi {
    dishes: Mutex<Vec<Dish>>,
    next_id: Mutex<DishId>,
    failing: AtomicBool,
}

impl MemoryFoodsApi {
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        let next_id = dishes.iter().map(|d| d.id).max().unwrap_or(0);
        Self {
            dishes: Mutex::new(dishes),
            next_id: Mutex::new(next_id),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Dish> {
        self.dishes.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl FoodsApi for MemoryFoodsApi {
    fn list(&self) -> Result<Vec<Dish>> {
        self.check()?;
        Ok(self.stored())
    }

    fn create(&self, dish: &NewDish) -> Result<Dish> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Dish {
            id: *next_id,
            name: dish.input.name.clone(),
            description: dish.input.description.clone(),
            price: dish.input.price.clone(),
            available: dish.available,
            image: dish.input.image.clone(),
        };
        self.dishes.lock().unwrap().push(created.clone());
        Ok(created)
    }

    fn update(&self, id: DishId, dish: &Dish) -> Result<Dish> {
        self.check()?;
        let mut dishes = self.dishes.lock().unwrap();
        let slot = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(ApiError::Http(404))?;
        *slot = Dish { id, ..dish.clone() };
        Ok(slot.clone())
    }

    fn delete(&self, id: DishId) -> Result<()> {
        self.check()?;
        let mut dishes = self.dishes.lock().unwrap();
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        if dishes.len() == before {
            return Err(ApiError::Http(404));
        }
        Ok(())
    }
}
