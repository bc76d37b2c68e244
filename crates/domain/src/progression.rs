use chrono::{DateTime, Utc};
use log::warn;

use crate::{CreateError, MuscleGroup, ReadError, RepRange, SlotAssignment, SlotID};

pub const LOWER_BODY_INCREMENT: f32 = 5.0;
pub const UPPER_BODY_INCREMENT: f32 = 2.5;

/// Append-only log of performed slots.
pub trait PerformanceRepository {
    /// Most recent record logged against the slot.
    fn latest_performance(&self, slot_id: SlotID) -> Result<Option<PerformanceRecord>, ReadError>;
    fn create_performance(
        &self,
        record: PerformanceRecord,
    ) -> Result<PerformanceRecord, CreateError>;
}

/// Load and reps achieved for a planned slot in one training session.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub slot_id: SlotID,
    pub date: DateTime<Utc>,
    pub weight: f32,
    /// Reps achieved per set, in set order
    pub reps: Vec<u32>,
    /// Target rep range of the slot as stored, e.g. "8-12"
    pub reps_range: String,
    pub muscle_group: MuscleGroup,
}

impl PerformanceRecord {
    #[must_use]
    pub fn new(slot: &SlotAssignment, date: DateTime<Utc>, weight: f32, reps: Vec<u32>) -> Self {
        Self {
            slot_id: slot.id,
            date,
            weight,
            reps,
            reps_range: slot.reps.to_string(),
            muscle_group: slot.exercise.muscle_group,
        }
    }
}

/// Parse logged reps in the form "10,10,8".
pub fn parse_reps(reps: &str) -> Result<Vec<u32>, RepsError> {
    if reps.trim().is_empty() {
        return Ok(vec![]);
    }
    reps.split(',')
        .map(|r| r.trim().parse::<u32>().map_err(|_| RepsError::ParseError))
        .collect()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a comma separated list of integers")]
    ParseError,
}

/// Load for the next session of a slot, `None` without any history.
///
/// Only the most recent record (the first entry) is considered. The load is increased once every
/// performed set reached the upper end of the rep range and held otherwise.
#[must_use]
pub fn suggest_next_load(history: &[PerformanceRecord]) -> Option<f32> {
    let last = history.first()?;

    // A reversed range such as "12-8" is rejected as well, its upper end is ambiguous.
    let reps_range = match RepRange::try_from(last.reps_range.as_str()) {
        Ok(reps_range) => reps_range,
        Err(err) => {
            warn!("keeping load for slot {}: {err}", *last.slot_id);
            return Some(last.weight);
        }
    };

    if last.reps.is_empty() {
        return Some(last.weight);
    }

    if last.reps.iter().all(|r| *r >= reps_range.max()) {
        Some(last.weight + increment(last.muscle_group))
    } else {
        Some(last.weight)
    }
}

fn increment(muscle_group: MuscleGroup) -> f32 {
    if muscle_group.is_legs() {
        LOWER_BODY_INCREMENT
    } else {
        UPPER_BODY_INCREMENT
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record(
        weight: f32,
        reps_range: &str,
        reps: &[u32],
        muscle_group: MuscleGroup,
    ) -> PerformanceRecord {
        PerformanceRecord {
            slot_id: 1.into(),
            date: Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap(),
            weight,
            reps: reps.to_vec(),
            reps_range: reps_range.to_string(),
            muscle_group,
        }
    }

    #[rstest]
    #[case(MuscleGroup::LegsQuad, 105.0)]
    #[case(MuscleGroup::LegsHam, 105.0)]
    #[case(MuscleGroup::Chest, 102.5)]
    #[case(MuscleGroup::Arms, 102.5)]
    fn test_suggest_next_load_increase(#[case] muscle_group: MuscleGroup, #[case] expected: f32) {
        let load = suggest_next_load(&[record(100.0, "8-12", &[12, 12, 12], muscle_group)]);
        assert_approx_eq!(load.unwrap(), expected);
    }

    #[rstest]
    #[case(&[12, 9, 12])]
    #[case(&[11, 11, 11])]
    fn test_suggest_next_load_hold(#[case] reps: &[u32]) {
        assert_eq!(
            suggest_next_load(&[record(100.0, "8-12", reps, MuscleGroup::LegsQuad)]),
            Some(100.0)
        );
    }

    #[test]
    fn test_suggest_next_load_above_max() {
        assert_eq!(
            suggest_next_load(&[record(60.0, "3-5", &[6, 5, 7, 5, 5], MuscleGroup::Back)]),
            Some(62.5)
        );
    }

    #[test]
    fn test_suggest_next_load_empty_history() {
        assert_eq!(suggest_next_load(&[]), None);
    }

    #[rstest]
    #[case("twelve")]
    #[case("")]
    fn test_suggest_next_load_malformed_rep_range(#[case] reps_range: &str) {
        assert_eq!(
            suggest_next_load(&[record(80.0, reps_range, &[20, 20], MuscleGroup::Chest)]),
            Some(80.0)
        );
    }

    #[test]
    fn test_suggest_next_load_reversed_rep_range() {
        assert_eq!(
            suggest_next_load(&[record(100.0, "12-8", &[8, 8], MuscleGroup::Chest)]),
            Some(100.0)
        );
        assert_eq!(
            suggest_next_load(&[record(100.0, "12-8", &[12, 12], MuscleGroup::Chest)]),
            Some(100.0)
        );
    }

    #[test]
    fn test_suggest_next_load_no_sets() {
        assert_eq!(
            suggest_next_load(&[record(40.0, "8-12", &[], MuscleGroup::Chest)]),
            Some(40.0)
        );
    }

    #[test]
    fn test_suggest_next_load_ignores_older_history() {
        let history = [
            record(100.0, "8-12", &[8, 8, 8], MuscleGroup::Chest),
            record(97.5, "8-12", &[12, 12, 12], MuscleGroup::Chest),
        ];
        assert_eq!(suggest_next_load(&history), Some(100.0));
    }

    #[rstest]
    #[case("10,10,10", Ok(vec![10, 10, 10]))]
    #[case(" 12, 9 ,12", Ok(vec![12, 9, 12]))]
    #[case("8", Ok(vec![8]))]
    #[case("", Ok(vec![]))]
    #[case("10,,10", Err(RepsError::ParseError))]
    #[case("ten", Err(RepsError::ParseError))]
    fn test_parse_reps(#[case] reps: &str, #[case] expected: Result<Vec<u32>, RepsError>) {
        assert_eq!(parse_reps(reps), expected);
    }
}
