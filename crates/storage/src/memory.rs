//! In-memory storage
//!
//! Holds all data of a running instance in process memory. The exercise store is seeded with the
//! built-in catalog. Plans follow discard-then-replace semantics: new plans for a user can only be
//! created after all previous plans of that user were deleted.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use gymplan_domain as domain;
use log::debug;

use crate::open_food_facts::PAGE_SIZE;

pub struct InMemoryStorage {
    exercises: Mutex<Vec<domain::Exercise>>,
    plans: Mutex<BTreeMap<domain::UserID, Vec<domain::SessionPlan>>>,
    performance: Mutex<Vec<domain::PerformanceRecord>>,
    diet_log: Mutex<Vec<domain::DietLogEntry>>,
    foods: Mutex<Vec<domain::FoodCandidate>>,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::with_exercises(domain::catalog::exercises())
    }

    #[must_use]
    pub fn with_exercises(exercises: Vec<domain::Exercise>) -> Self {
        Self {
            exercises: Mutex::new(exercises),
            plans: Mutex::new(BTreeMap::new()),
            performance: Mutex::new(vec![]),
            diet_log: Mutex::new(vec![]),
            foods: Mutex::new(vec![]),
        }
    }

    /// Serve food searches from a fixed set of candidates.
    #[must_use]
    pub fn with_foods(self, foods: Vec<domain::FoodCandidate>) -> Self {
        Self {
            foods: Mutex::new(foods),
            ..self
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, domain::StorageError> {
    mutex
        .lock()
        .map_err(|err| domain::StorageError::Other(err.to_string().into()))
}

impl domain::ExerciseRepository for InMemoryStorage {
    fn find_exercises(
        &self,
        filter: &domain::ExerciseFilter,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let exercises = lock(&self.exercises)?;
        Ok(filter
            .exercises(exercises.iter())
            .into_iter()
            .cloned()
            .collect())
    }
}

impl domain::PlanRepository for InMemoryStorage {
    fn read_plans(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::SessionPlan>, domain::ReadError> {
        Ok(lock(&self.plans)?
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn delete_plans(&self, user_id: domain::UserID) -> Result<usize, domain::DeleteError> {
        let deleted = lock(&self.plans)?
            .remove(&user_id)
            .map_or(0, |plans| plans.len());
        debug!("deleted {deleted} plans of {}", *user_id);
        Ok(deleted)
    }

    fn create_plans(
        &self,
        user_id: domain::UserID,
        plans: Vec<domain::SessionPlan>,
    ) -> Result<Vec<domain::SessionPlan>, domain::CreateError> {
        let mut stored = lock(&self.plans)?;
        if stored.get(&user_id).is_some_and(|p| !p.is_empty()) {
            return Err(domain::CreateError::Conflict);
        }
        stored.insert(user_id, plans.clone());
        Ok(plans)
    }
}

impl domain::PerformanceRepository for InMemoryStorage {
    fn latest_performance(
        &self,
        slot_id: domain::SlotID,
    ) -> Result<Option<domain::PerformanceRecord>, domain::ReadError> {
        Ok(lock(&self.performance)?
            .iter()
            .filter(|r| r.slot_id == slot_id)
            .max_by_key(|r| r.date)
            .cloned())
    }

    fn create_performance(
        &self,
        record: domain::PerformanceRecord,
    ) -> Result<domain::PerformanceRecord, domain::CreateError> {
        lock(&self.performance)?.push(record.clone());
        Ok(record)
    }
}

impl domain::DietLogRepository for InMemoryStorage {
    fn read_diet_log(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::DietLogEntry>, domain::ReadError> {
        Ok(lock(&self.diet_log)?
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    fn create_diet_log_entry(
        &self,
        entry: domain::DietLogEntry,
    ) -> Result<domain::DietLogEntry, domain::CreateError> {
        lock(&self.diet_log)?.push(entry.clone());
        Ok(entry)
    }
}

impl domain::FoodRepository for InMemoryStorage {
    /// Candidates whose name contains any word of the query, in stored order.
    fn search_foods(&self, query: &str) -> Result<Vec<domain::FoodCandidate>, domain::ReadError> {
        let terms = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        Ok(lock(&self.foods)?
            .iter()
            .filter(|f| {
                let name = f.name.to_lowercase();
                terms.iter().any(|t| name.contains(t.as_str()))
            })
            .take(PAGE_SIZE)
            .cloned()
            .collect())
    }
}
