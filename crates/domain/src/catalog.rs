//! Built-in exercise catalog used to seed an empty exercise store.

use crate::{
    Equipment::{self, Barbell, Bodyweight, Dumbbell, Machine},
    Exercise, ExerciseID,
    Mechanic::{self, Compound, Isolation},
    MuscleGroup::{self, Arms, Back, Chest, Core, LegsHam, LegsQuad, Shoulders},
    Pattern,
};

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CatalogExercise {
    pub name: &'static str,
    pub mechanic: Mechanic,
    pub muscle_group: MuscleGroup,
    pub pattern: Pattern,
    pub equipment: Equipment,
}

impl CatalogExercise {
    #[must_use]
    pub fn to_exercise(&self, id: ExerciseID) -> Exercise {
        Exercise {
            id,
            name: self.name.to_string(),
            mechanic: self.mechanic,
            muscle_group: self.muscle_group,
            pattern: self.pattern,
            equipment: self.equipment,
        }
    }
}

/// The built-in catalog with sequential IDs starting at 1.
#[must_use]
pub fn exercises() -> Vec<Exercise> {
    (1..)
        .zip(EXERCISES.iter())
        .map(|(id, e): (u128, _)| e.to_exercise(id.into()))
        .collect()
}

const fn exercise(
    name: &'static str,
    mechanic: Mechanic,
    muscle_group: MuscleGroup,
    pattern: Pattern,
    equipment: Equipment,
) -> CatalogExercise {
    CatalogExercise {
        name,
        mechanic,
        muscle_group,
        pattern,
        equipment,
    }
}

pub static EXERCISES: [CatalogExercise; 31] = [
    // Chest
    exercise("Barbell Bench Press", Compound, Chest, Pattern::Push, Barbell),
    exercise("Dumbbell Bench Press", Compound, Chest, Pattern::Push, Dumbbell),
    exercise("Incline Dumbbell Press", Compound, Chest, Pattern::Push, Dumbbell),
    exercise("Push-Up", Compound, Chest, Pattern::Push, Bodyweight),
    exercise("Chest Fly (Machine)", Isolation, Chest, Pattern::Push, Machine),
    // Back
    exercise("Pull-Up", Compound, Back, Pattern::Pull, Bodyweight),
    exercise("Barbell Row", Compound, Back, Pattern::Pull, Barbell),
    exercise("Lat Pulldown", Compound, Back, Pattern::Pull, Machine),
    exercise("Seated Cable Row", Compound, Back, Pattern::Pull, Machine),
    exercise("Dumbbell Row", Compound, Back, Pattern::Pull, Dumbbell),
    // Quads
    exercise("Barbell Squat", Compound, LegsQuad, Pattern::Squat, Barbell),
    exercise("Goblet Squat", Compound, LegsQuad, Pattern::Squat, Dumbbell),
    exercise("Leg Press", Compound, LegsQuad, Pattern::Squat, Machine),
    exercise("Walking Lunge", Compound, LegsQuad, Pattern::Lunge, Dumbbell),
    exercise("Bulgarian Split Squat", Compound, LegsQuad, Pattern::Lunge, Dumbbell),
    exercise("Leg Extension", Isolation, LegsQuad, Pattern::Push, Machine),
    // Hamstrings
    exercise("Deadlift", Compound, LegsHam, Pattern::Hinge, Barbell),
    exercise("Romanian Deadlift", Compound, LegsHam, Pattern::Hinge, Barbell),
    exercise("Leg Curl", Isolation, LegsHam, Pattern::Pull, Machine),
    // Shoulders
    exercise("Overhead Press", Compound, Shoulders, Pattern::Push, Barbell),
    exercise("Dumbbell Shoulder Press", Compound, Shoulders, Pattern::Push, Dumbbell),
    exercise("Lateral Raise", Isolation, Shoulders, Pattern::Push, Dumbbell),
    exercise("Face Pull", Isolation, Shoulders, Pattern::Pull, Machine),
    // Arms
    exercise("Barbell Curl", Isolation, Arms, Pattern::Pull, Barbell),
    exercise("Dumbbell Curl", Isolation, Arms, Pattern::Pull, Dumbbell),
    exercise("Tricep Pushdown", Isolation, Arms, Pattern::Push, Machine),
    exercise("Skullcrusher", Isolation, Arms, Pattern::Push, Barbell),
    // Core
    exercise("Plank", Isolation, Core, Pattern::Static, Bodyweight),
    exercise("Hanging Leg Raise", Compound, Core, Pattern::Pull, Bodyweight),
    exercise("Cable Woodchop", Compound, Core, Pattern::Pull, Machine),
    exercise("Farmer's Walk", Compound, Core, Pattern::Carry, Dumbbell),
];
