#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod diet;
mod error;
mod exercise;
mod food;
mod picker;
mod profile;
mod progression;
mod routine;
mod selection;
mod service;
mod session;
mod settings;
mod volume;

pub use diet::{
    DietLogEntry, DietLogRepository, DietTargets, DietTotals, activity_factor, bmr,
    calculate_diet, daily_totals,
};
pub use error::{
    CreateError, DeleteError, ReadError, RegenerateError, StorageError, ValidationError,
};
pub use exercise::{
    Equipment, Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, Mechanic, MuscleGroup,
    Pattern,
};
pub use food::{DEFAULT_LIMIT, FoodCandidate, FoodItem, FoodRepository, Portion, rank_foods};
pub use picker::{FixedPicker, Picker, RandomPicker};
pub use profile::{
    Experience, Goal, ProfileError, Sex, UserID, UserProfile, validate_age,
    validate_days_available, validate_height, validate_weight,
};
pub use progression::{
    LOWER_BODY_INCREMENT, PerformanceRecord, PerformanceRepository, RepsError,
    UPPER_BODY_INCREMENT, parse_reps, suggest_next_load,
};
pub use routine::{PlanRepository, Structure, generate_routine};
pub use selection::ExerciseSelector;
pub use service::Service;
pub use session::{Archetype, SessionPlan, Slot, SlotAssignment, SlotID, build_session};
pub use settings::Settings;
pub use volume::{RepRange, RepRangeError, Volume};
