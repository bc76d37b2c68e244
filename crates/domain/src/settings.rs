use serde::{Deserialize, Serialize};

use crate::food;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of ranked food search results
    pub food_search_limit: usize,
    /// Maximum number of raw candidates taken from the food database
    pub food_page_size: usize,
    /// Load suggested for a slot without any logged performance
    pub starting_load: f32,
    /// Seed for exercise selection, random if unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            food_search_limit: food::DEFAULT_LIMIT,
            food_page_size: 100,
            starting_load: 20.0,
            seed: None,
        }
    }
}
