use log::trace;
use serde::{Deserialize, Serialize};

use crate::ReadError;

pub const DEFAULT_LIMIT: usize = 10;

const KJ_PER_KCAL: f64 = 4.184;

/// External food database queried by free text.
pub trait FoodRepository {
    /// Raw candidates in the order of the database's own popularity ranking.
    fn search_foods(&self, query: &str) -> Result<Vec<FoodCandidate>, ReadError>;
}

/// Unvalidated search result, nutrition values per 100 g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub name: String,
    pub calories: Option<f64>,
    pub energy_kj: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl FoodCandidate {
    fn calories(&self) -> f64 {
        match (self.calories, self.energy_kj) {
            (Some(kcal), _) => kcal,
            (None, Some(kj)) if kj != 0.0 => kj / KJ_PER_KCAL,
            (None, _) => 0.0,
        }
    }
}

/// Nutrition values per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    /// Nutrition values scaled to the given amount.
    #[must_use]
    pub fn portion(&self, grams: f64) -> Portion {
        let factor = grams / 100.0;
        #[allow(clippy::cast_possible_truncation)]
        let calories = (self.calories * factor).trunc() as i32;
        Portion {
            name: self.name.clone(),
            grams,
            calories,
            protein: round_to_tenth(self.protein * factor),
            carbs: round_to_tenth(self.carbs * factor),
            fat: round_to_tenth(self.fat * factor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub name: String,
    pub grams: f64,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Validate candidates and order them by how well their name matches the query.
///
/// Lower scores rank first: an exact match scores -1000, a name starting with the query -50 and
/// a name containing the query another -10. Each character the name exceeds the query adds 2.
/// Equal scores keep their input order.
#[must_use]
pub fn rank_foods(query: &str, candidates: Vec<FoodCandidate>, limit: usize) -> Vec<FoodItem> {
    let query = query.trim().to_lowercase();
    let query = query.trim();
    let keep_empty = query.contains("water");

    let mut scored = candidates
        .into_iter()
        .filter_map(|candidate| {
            if candidate.name.trim().is_empty() {
                return None;
            }
            let calories = candidate.calories();
            let protein = candidate.protein.unwrap_or_default();
            if calories == 0.0 && protein == 0.0 && !keep_empty {
                trace!("dropping {:?} without calories and protein", candidate.name);
                return None;
            }
            let score = score(&candidate.name, query);
            Some((
                score,
                FoodItem {
                    name: candidate.name,
                    calories,
                    protein,
                    carbs: candidate.carbs.unwrap_or_default(),
                    fat: candidate.fat.unwrap_or_default(),
                },
            ))
        })
        .collect::<Vec<_>>();

    scored.sort_by_key(|(score, _)| *score);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, item)| item)
        .collect()
}

fn score(name: &str, query: &str) -> i64 {
    let name = name.trim().to_lowercase();
    let name = name.trim();

    let mut score = 0;
    if name == query {
        score -= 1000;
    } else if name.starts_with(query) {
        score -= 50;
    }
    if name.contains(query) {
        score -= 10;
    }
    score + 2 * (char_count(name) - char_count(query))
}

fn char_count(value: &str) -> i64 {
    i64::try_from(value.chars().count()).unwrap_or(i64::MAX)
}
