use std::collections::BTreeSet;

use log::trace;

use crate::{Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, Picker, ReadError};

/// Draws single exercises from the catalog.
pub struct ExerciseSelector<'a, C: ?Sized, P> {
    catalog: &'a C,
    picker: P,
}

impl<'a, C, P> ExerciseSelector<'a, C, P>
where
    C: ExerciseRepository + ?Sized,
    P: Picker,
{
    pub fn new(catalog: &'a C, picker: P) -> Self {
        Self { catalog, picker }
    }

    /// Pick one exercise matching `filter` that is not contained in `exclude`.
    ///
    /// `Ok(None)` means the catalog holds no such exercise.
    pub fn select(
        &mut self,
        filter: &ExerciseFilter,
        exclude: &BTreeSet<ExerciseID>,
    ) -> Result<Option<Exercise>, ReadError> {
        let mut candidates = self
            .catalog
            .find_exercises(filter)?
            .into_iter()
            .filter(|e| filter.matches(e) && !exclude.contains(&e.id))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            trace!("no exercise matching {filter:?}");
            return Ok(None);
        }

        let idx = self.picker.pick(candidates.len());
        Ok(Some(candidates.swap_remove(idx)))
    }
}

impl ExerciseRepository for [Exercise] {
    fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError> {
        Ok(filter
            .exercises(self.iter())
            .into_iter()
            .cloned()
            .collect())
    }
}

impl ExerciseRepository for Vec<Exercise> {
    fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError> {
        self.as_slice().find_exercises(filter)
    }
}
