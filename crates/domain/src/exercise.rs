use derive_more::Deref;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ReadError;

/// Read access to the exercise catalog.
pub trait ExerciseRepository {
    /// All exercises matching every constraint of the filter.
    fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub mechanic: Mechanic,
    pub muscle_group: MuscleGroup,
    pub pattern: Pattern,
    pub equipment: Equipment,
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct ExerciseID(Uuid);

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanic {
    Compound,
    Isolation,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    LegsQuad,
    LegsHam,
    Shoulders,
    Core,
    Arms,
}

impl MuscleGroup {
    #[must_use]
    pub fn is_legs(self) -> bool {
        matches!(self, MuscleGroup::LegsQuad | MuscleGroup::LegsHam)
    }
}

/// Movement pattern of an exercise.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Push,
    Pull,
    Squat,
    Hinge,
    Lunge,
    Carry,
    Static,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Dumbbell,
    Machine,
}

/// Constraints of a single selection step.
///
/// Unset fields are unconstrained, set fields must all match exactly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub muscle_group: Option<MuscleGroup>,
    pub pattern: Option<Pattern>,
    pub mechanic: Option<Mechanic>,
}

impl ExerciseFilter {
    pub const ANY: ExerciseFilter = ExerciseFilter {
        muscle_group: None,
        pattern: None,
        mechanic: None,
    };

    #[must_use]
    pub const fn muscle_group(self, muscle_group: MuscleGroup) -> Self {
        Self {
            muscle_group: Some(muscle_group),
            ..self
        }
    }

    #[must_use]
    pub const fn pattern(self, pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    #[must_use]
    pub const fn mechanic(self, mechanic: Mechanic) -> Self {
        Self {
            mechanic: Some(mechanic),
            ..self
        }
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.muscle_group.is_none_or(|m| m == exercise.muscle_group)
            && self.pattern.is_none_or(|p| p == exercise.pattern)
            && self.mechanic.is_none_or(|m| m == exercise.mechanic)
    }

    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }
}
