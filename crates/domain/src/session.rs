use std::collections::BTreeSet;

use chrono::{Duration, Weekday};
use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{
    Exercise, ExerciseFilter, ExerciseRepository, ExerciseSelector, Mechanic, MuscleGroup,
    Pattern, Picker, ReadError, RepRange, Volume,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub name: String,
    /// Day of the week, 1 (Monday) to 7 (Sunday)
    pub schedule_day: u32,
    pub archetype: Archetype,
    pub slots: Vec<SlotAssignment>,
}

impl SessionPlan {
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        let day = u8::try_from(self.schedule_day.checked_sub(1)?).ok()?;
        Weekday::try_from(day).ok()
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.slots.iter().map(|s| &s.exercise)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    pub id: SlotID,
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: RepRange,
    pub rest: Duration,
    /// Position within the session, starting at 1
    pub order: u32,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotID(Uuid);

impl SlotID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SlotID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SlotID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

/// One selection step of a session program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub filter: ExerciseFilter,
    /// Tried only if `filter` yields no exercise
    pub fallback: Option<ExerciseFilter>,
}

impl Slot {
    const fn new(filter: ExerciseFilter) -> Self {
        Self {
            filter,
            fallback: None,
        }
    }

    const fn or(self, fallback: ExerciseFilter) -> Self {
        Self {
            fallback: Some(fallback),
            ..self
        }
    }
}

const ANY: ExerciseFilter = ExerciseFilter::ANY;

static FULL_BODY: [Slot; 6] = [
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsQuad)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(ANY.pattern(Pattern::Hinge).mechanic(Mechanic::Compound)),
    Slot::new(ANY.pattern(Pattern::Push).mechanic(Mechanic::Compound)),
    Slot::new(ANY.pattern(Pattern::Pull).mechanic(Mechanic::Compound)),
    Slot::new(ANY.muscle_group(MuscleGroup::Core)),
    Slot::new(ANY.muscle_group(MuscleGroup::Arms))
        .or(ANY.mechanic(Mechanic::Isolation)),
];

static UPPER: [Slot; 6] = [
    // horizontal push
    Slot::new(
        ANY.muscle_group(MuscleGroup::Chest)
            .pattern(Pattern::Push)
            .mechanic(Mechanic::Compound),
    ),
    // horizontal pull
    Slot::new(
        ANY.muscle_group(MuscleGroup::Back)
            .pattern(Pattern::Pull)
            .mechanic(Mechanic::Compound),
    ),
    // vertical push
    Slot::new(
        ANY.muscle_group(MuscleGroup::Shoulders)
            .pattern(Pattern::Push)
            .mechanic(Mechanic::Compound),
    ),
    // vertical pull
    Slot::new(ANY.muscle_group(MuscleGroup::Back).pattern(Pattern::Pull)),
    Slot::new(ANY.pattern(Pattern::Push).mechanic(Mechanic::Isolation)),
    Slot::new(ANY.muscle_group(MuscleGroup::Arms)),
];

static LOWER: [Slot; 6] = [
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsQuad)
            .pattern(Pattern::Squat)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(ANY.pattern(Pattern::Hinge).mechanic(Mechanic::Compound)),
    Slot::new(ANY.pattern(Pattern::Lunge)),
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsQuad)
            .mechanic(Mechanic::Isolation),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsHam)
            .mechanic(Mechanic::Isolation),
    ),
    Slot::new(ANY.muscle_group(MuscleGroup::Core)),
];

static PUSH: [Slot; 6] = [
    Slot::new(
        ANY.muscle_group(MuscleGroup::Chest)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::Shoulders)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::Chest)
            .mechanic(Mechanic::Isolation),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::Shoulders)
            .mechanic(Mechanic::Isolation),
    ),
    // triceps
    Slot::new(ANY.muscle_group(MuscleGroup::Arms).pattern(Pattern::Push)),
    Slot::new(ANY.muscle_group(MuscleGroup::Arms).pattern(Pattern::Push))
        .or(ANY.pattern(Pattern::Push)),
];

static PULL: [Slot; 6] = [
    Slot::new(
        ANY.muscle_group(MuscleGroup::Back)
            .pattern(Pattern::Pull)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::Back)
            .pattern(Pattern::Pull)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(ANY.muscle_group(MuscleGroup::Back)),
    // biceps
    Slot::new(ANY.muscle_group(MuscleGroup::Arms).pattern(Pattern::Pull)),
    Slot::new(ANY.muscle_group(MuscleGroup::Arms).pattern(Pattern::Pull)),
    Slot::new(ANY.muscle_group(MuscleGroup::Core)),
];

static LEGS: [Slot; 6] = [
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsQuad)
            .pattern(Pattern::Squat)
            .mechanic(Mechanic::Compound),
    ),
    Slot::new(ANY.pattern(Pattern::Hinge)),
    Slot::new(ANY.pattern(Pattern::Lunge)),
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsQuad)
            .mechanic(Mechanic::Isolation),
    ),
    Slot::new(
        ANY.muscle_group(MuscleGroup::LegsHam)
            .mechanic(Mechanic::Isolation),
    ),
    Slot::new(ANY.muscle_group(MuscleGroup::Core)),
];

impl Archetype {
    #[must_use]
    pub fn slots(self) -> &'static [Slot] {
        match self {
            Archetype::FullBody => &FULL_BODY,
            Archetype::Upper => &UPPER,
            Archetype::Lower => &LOWER,
            Archetype::Push => &PUSH,
            Archetype::Pull => &PULL,
            Archetype::Legs => &LEGS,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Archetype::FullBody => "FBW",
            Archetype::Upper => "Upper",
            Archetype::Lower => "Lower",
            Archetype::Push => "Push",
            Archetype::Pull => "Pull",
            Archetype::Legs => "Legs",
        }
    }
}

/// Run the slot program of `archetype` and assemble the resulting session.
///
/// Every exercise is used at most once per session. Slots for which neither the filter nor the
/// fallback finds an exercise are left out, so the order indices stay contiguous.
pub fn build_session<C, P>(
    archetype: Archetype,
    name: String,
    schedule_day: u32,
    volume: Volume,
    selector: &mut ExerciseSelector<'_, C, P>,
) -> Result<SessionPlan, ReadError>
where
    C: ExerciseRepository + ?Sized,
    P: Picker,
{
    let mut used = BTreeSet::new();
    let mut slots = vec![];

    for (step, slot) in archetype.slots().iter().enumerate() {
        let mut exercise = selector.select(&slot.filter, &used)?;
        if exercise.is_none() {
            if let Some(fallback) = &slot.fallback {
                debug!("{name}: using fallback for slot {}", step + 1);
                exercise = selector.select(fallback, &used)?;
            }
        }
        let Some(exercise) = exercise else {
            debug!("{name}: no exercise for slot {}", step + 1);
            continue;
        };
        used.insert(exercise.id);
        slots.push(SlotAssignment {
            id: SlotID::new(),
            exercise,
            sets: volume.sets,
            reps: volume.reps,
            rest: volume.rest,
            order: u32::try_from(slots.len())
                .unwrap_or(u32::MAX)
                .saturating_add(1),
        });
    }

    Ok(SessionPlan {
        name,
        schedule_day,
        archetype,
        slots,
    })
}
