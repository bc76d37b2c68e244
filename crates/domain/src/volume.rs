use std::fmt;

use chrono::Duration;

use crate::Goal;

/// Set, rep and rest prescription shared by all slots of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    pub sets: u32,
    pub reps: RepRange,
    pub rest: Duration,
}

impl Volume {
    #[must_use]
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Strength => Volume {
                sets: 5,
                reps: RepRange { min: 3, max: 5 },
                rest: Duration::seconds(180),
            },
            Goal::Hypertrophy => Volume {
                sets: 3,
                reps: RepRange { min: 8, max: 12 },
                rest: Duration::seconds(90),
            },
            Goal::Endurance | Goal::WeightLoss => Volume {
                sets: 3,
                reps: RepRange { min: 15, max: 20 },
                rest: Duration::seconds(60),
            },
        }
    }
}

/// Target repetitions per set, written as "min-max".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    min: u32,
    max: u32,
}

impl RepRange {
    pub fn new(min: u32, max: u32) -> Result<Self, RepRangeError> {
        if min > max {
            return Err(RepRangeError::Order(min, max));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let Some((min, max)) = value.split_once('-') else {
            return Err(RepRangeError::Format);
        };
        match (min.trim().parse::<u32>(), max.trim().parse::<u32>()) {
            (Ok(min), Ok(max)) => RepRange::new(min, max),
            _ => Err(RepRangeError::Format),
        }
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Rep range must have the form \"min-max\"")]
    Format,
    #[error("Rep range minimum must not exceed maximum ({0} > {1})")]
    Order(u32, u32),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(Goal::Strength, 5, "3-5", 180)]
    #[case(Goal::Hypertrophy, 3, "8-12", 90)]
    #[case(Goal::Endurance, 3, "15-20", 60)]
    #[case(Goal::WeightLoss, 3, "15-20", 60)]
    fn test_volume_for_goal(
        #[case] goal: Goal,
        #[case] sets: u32,
        #[case] reps: &str,
        #[case] rest: i64,
    ) {
        let volume = Volume::for_goal(goal);
        assert_eq!(volume.sets, sets);
        assert_eq!(volume.reps.to_string(), reps);
        assert_eq!(volume.rest, Duration::seconds(rest));
    }

    #[test]
    fn test_volume_for_every_goal_is_valid() {
        for goal in Goal::iter() {
            let volume = Volume::for_goal(goal);
            assert!(volume.rest > Duration::zero());
            assert!(volume.reps.min() <= volume.reps.max());
            assert_eq!(
                RepRange::try_from(volume.reps.to_string().as_str()),
                Ok(volume.reps)
            );
        }
    }

    #[rstest]
    #[case("8-12", Ok(RepRange { min: 8, max: 12 }))]
    #[case(" 3 - 5 ", Ok(RepRange { min: 3, max: 5 }))]
    #[case("10-10", Ok(RepRange { min: 10, max: 10 }))]
    #[case("12-8", Err(RepRangeError::Order(12, 8)))]
    #[case("12", Err(RepRangeError::Format))]
    #[case("a-b", Err(RepRangeError::Format))]
    #[case("8-12-15", Err(RepRangeError::Format))]
    #[case("", Err(RepRangeError::Format))]
    fn test_rep_range_try_from(
        #[case] value: &str,
        #[case] expected: Result<RepRange, RepRangeError>,
    ) {
        assert_eq!(RepRange::try_from(value), expected);
    }
}
