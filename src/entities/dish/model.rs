//! Dish entity model

use crate::core::Record;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A dish on the menu
///
/// `price` keeps the number exactly as the client sent it, so `5` stays `5`
/// and `12.5` stays `12.5` in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    const RESOURCE: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Mutable dish fields decoded from a validated request
#[derive(Debug, Clone, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl DishDraft {
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }

    /// Overwrite every field of `dish` except its id
    pub fn apply_to(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.price = self.price;
        dish.image_url = self.image_url;
    }
}
