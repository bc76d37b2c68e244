use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error, info};

use crate::{
    CreateError, DeleteError, DietLogEntry, DietLogRepository, DietTotals, ExerciseRepository,
    ExerciseSelector, FoodItem, FoodRepository, PerformanceRecord, PerformanceRepository, Picker,
    PlanRepository, Portion, RandomPicker, ReadError, RegenerateError, SessionPlan, Settings,
    SlotID, UserID, UserProfile, daily_totals, generate_routine, rank_foods, suggest_next_load,
};

pub struct Service<R> {
    repository: R,
    settings: Settings,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, Settings::default())
    }

    pub fn with_settings(repository: R, settings: Settings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository + PlanRepository> Service<R> {
    pub fn get_plans(&self, user_id: UserID) -> Result<Vec<SessionPlan>, ReadError> {
        log_on_error!(
            self.repository.read_plans(user_id),
            ReadError,
            "get",
            "plans"
        )
    }

    /// Replace all plans of the user by a newly generated set.
    pub fn regenerate_routine(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<SessionPlan>, RegenerateError> {
        match self.settings.seed {
            Some(seed) => self.regenerate_routine_with(profile, RandomPicker::seeded(seed)),
            None => self.regenerate_routine_with(profile, RandomPicker::from_entropy()),
        }
    }

    pub fn regenerate_routine_with<P: Picker>(
        &self,
        profile: &UserProfile,
        picker: P,
    ) -> Result<Vec<SessionPlan>, RegenerateError> {
        let mut selector = ExerciseSelector::new(&self.repository, picker);
        let plans = log_on_error!(
            generate_routine(profile, &mut selector),
            ReadError,
            "generate",
            "routine"
        )?;
        let deleted = log_on_error!(
            self.repository.delete_plans(profile.user_id),
            DeleteError,
            "delete",
            "plans"
        )?;
        let plans = log_on_error!(
            self.repository.create_plans(profile.user_id, plans),
            CreateError,
            "create",
            "plans"
        )?;
        info!(
            "replaced {deleted} plans of {} by {} new plans",
            *profile.user_id,
            plans.len()
        );
        Ok(plans)
    }
}

impl<R: PerformanceRepository> Service<R> {
    /// Load for the next session of the slot, the configured starting load without history.
    pub fn suggested_load(&self, slot_id: SlotID) -> Result<f32, ReadError> {
        let latest = log_on_error!(
            self.repository.latest_performance(slot_id),
            ReadError,
            "get",
            "performance"
        )?;
        Ok(suggest_next_load(latest.as_slice())
            .unwrap_or(self.settings.starting_load))
    }

    pub fn log_performance(
        &self,
        record: PerformanceRecord,
    ) -> Result<PerformanceRecord, CreateError> {
        log_on_error!(
            self.repository.create_performance(record),
            CreateError,
            "create",
            "performance"
        )
    }
}

impl<R: FoodRepository> Service<R> {
    /// Ranked foods matching the query.
    ///
    /// A failing lookup is logged and yields no results.
    pub fn search_food(&self, query: &str) -> Vec<FoodItem> {
        let mut candidates = log_on_error!(
            self.repository.search_foods(query),
            ReadError,
            "search",
            "foods"
        )
        .unwrap_or_default();
        candidates.truncate(self.settings.food_page_size);
        rank_foods(query, candidates, self.settings.food_search_limit)
    }
}

impl<R: DietLogRepository> Service<R> {
    pub fn log_food(
        &self,
        user_id: UserID,
        date: DateTime<Utc>,
        portion: &Portion,
    ) -> Result<DietLogEntry, CreateError> {
        log_on_error!(
            self.repository
                .create_diet_log_entry(DietLogEntry::new(user_id, date, portion)),
            CreateError,
            "create",
            "diet log entry"
        )
    }

    pub fn get_daily_totals(
        &self,
        user_id: UserID,
        date: NaiveDate,
    ) -> Result<DietTotals, ReadError> {
        let entries = log_on_error!(
            self.repository.read_diet_log(user_id),
            ReadError,
            "get",
            "diet log"
        )?;
        Ok(daily_totals(&entries, date))
    }
}
