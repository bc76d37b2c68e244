use std::fmt;

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use uuid::Uuid;

use crate::ValidationError;

/// Snapshot of the account data the planner works with.
///
/// The profile is owned by the account subsystem. Every calculation treats it as an immutable
/// input for the duration of one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserID,
    /// Body weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// Age in years
    pub age: u32,
    pub sex: Sex,
    pub goal: Goal,
    pub experience: Experience,
    pub days_available: u32,
}

impl UserProfile {
    /// Reject profiles outside the documented value ranges.
    ///
    /// The planner itself never calls this. Out-of-range values fall through to the default
    /// branches of the calculations instead.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.weight.is_nan() || self.weight <= 0.0 {
            return Err(ProfileError::Weight);
        }
        if self.height.is_nan() || self.height <= 0.0 {
            return Err(ProfileError::Height);
        }
        if self.age == 0 {
            return Err(ProfileError::Age);
        }
        if !(1..=7).contains(&self.days_available) {
            return Err(ProfileError::DaysAvailable(self.days_available));
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("Weight must be a positive number")]
    Weight,
    #[error("Height must be a positive number")]
    Height,
    #[error("Age must be a positive integer")]
    Age,
    #[error("Days available must be in the range 1 to 7 ({0})")]
    DaysAvailable(u32),
}

pub fn validate_weight(weight: &str) -> Result<f64, ValidationError> {
    validate_positive(weight, "Weight")
}

pub fn validate_height(height: &str) -> Result<f64, ValidationError> {
    validate_positive(height, "Height")
}

fn validate_positive(value: &str, field: &str) -> Result<f64, ValidationError> {
    match value.replace(',', ".").trim().parse::<f64>() {
        Ok(parsed_value) => {
            if parsed_value > 0.0 {
                Ok(parsed_value)
            } else {
                Err(ValidationError::Other(
                    format!("{field} must be a positive decimal number").into(),
                ))
            }
        }
        Err(_) => Err(ValidationError::Other(
            format!("{field} must be a decimal number").into(),
        )),
    }
}

pub fn validate_age(age: &str) -> Result<u32, ValidationError> {
    match age.trim().parse::<u32>() {
        Ok(parsed_age) if parsed_age > 0 => Ok(parsed_age),
        _ => Err(ValidationError::Other(
            "Age must be a positive integer".into(),
        )),
    }
}

pub fn validate_days_available(days: &str) -> Result<u32, ValidationError> {
    match days.trim().parse::<u32>() {
        Ok(parsed_days) if (1..=7).contains(&parsed_days) => Ok(parsed_days),
        _ => Err(ValidationError::Other(
            "Days available must be an integer in the range 1 to 7".into(),
        )),
    }
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct UserID(Uuid);

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Sex::MALE,
            _ => Sex::FEMALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
}

impl From<&str> for Goal {
    /// Unknown goals land in the endurance bucket, which shares volume and macro settings with
    /// weight loss.
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "strength" => Goal::Strength,
            "hypertrophy" => Goal::Hypertrophy,
            "weight_loss" => Goal::WeightLoss,
            _ => Goal::Endurance,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
}

impl From<&str> for Experience {
    /// Unknown levels get the beginner structure.
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "intermediate" | "advanced" => Experience::Intermediate,
            _ => Experience::Beginner,
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: 1.into(),
            weight: 80.0,
            height: 180.0,
            age: 30,
            sex: Sex::MALE,
            goal: Goal::Hypertrophy,
            experience: Experience::Intermediate,
            days_available: 4,
        }
    }

    #[rstest]
    #[case("male", Sex::MALE)]
    #[case(" Male ", Sex::MALE)]
    #[case("female", Sex::FEMALE)]
    #[case("other", Sex::FEMALE)]
    fn test_sex_from_str(#[case] value: &str, #[case] expected: Sex) {
        assert_eq!(Sex::from(value), expected);
    }

    #[rstest]
    #[case("strength", Goal::Strength)]
    #[case("hypertrophy", Goal::Hypertrophy)]
    #[case("endurance", Goal::Endurance)]
    #[case("weight_loss", Goal::WeightLoss)]
    #[case("WEIGHT_LOSS", Goal::WeightLoss)]
    #[case("powerlifting", Goal::Endurance)]
    fn test_goal_from_str(#[case] value: &str, #[case] expected: Goal) {
        assert_eq!(Goal::from(value), expected);
    }

    #[rstest]
    #[case(Goal::Strength, "strength")]
    #[case(Goal::WeightLoss, "weight_loss")]
    fn test_goal_display(#[case] goal: Goal, #[case] string: &str) {
        assert_eq!(goal.to_string(), string);
    }

    #[rstest]
    #[case("beginner", Experience::Beginner)]
    #[case("intermediate", Experience::Intermediate)]
    #[case("advanced", Experience::Intermediate)]
    #[case(" Intermediate ", Experience::Intermediate)]
    #[case("expert", Experience::Beginner)]
    #[case("", Experience::Beginner)]
    fn test_experience_from_str(#[case] value: &str, #[case] expected: Experience) {
        assert_eq!(Experience::from(value), expected);
    }

    #[test]
    fn test_profile_validate() {
        assert_eq!(profile().validate(), Ok(()));
        assert_eq!(
            UserProfile {
                weight: 0.0,
                ..profile()
            }
            .validate(),
            Err(ProfileError::Weight)
        );
        assert_eq!(
            UserProfile {
                height: -1.0,
                ..profile()
            }
            .validate(),
            Err(ProfileError::Height)
        );
        assert_eq!(
            UserProfile { age: 0, ..profile() }.validate(),
            Err(ProfileError::Age)
        );
        assert_eq!(
            UserProfile {
                days_available: 8,
                ..profile()
            }
            .validate(),
            Err(ProfileError::DaysAvailable(8))
        );
    }

    #[rstest]
    #[case("80", Some(80.0))]
    #[case("72,5", Some(72.5))]
    #[case("0", None)]
    #[case("heavy", None)]
    fn test_validate_weight(#[case] value: &str, #[case] expected: Option<f64>) {
        assert_eq!(validate_weight(value).ok(), expected);
    }

    #[rstest]
    #[case("3", Some(3))]
    #[case(" 7 ", Some(7))]
    #[case("0", None)]
    #[case("8", None)]
    #[case("x", None)]
    fn test_validate_days_available(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(validate_days_available(value).ok(), expected);
    }

    #[rstest]
    #[case("30", Some(30))]
    #[case("0", None)]
    fn test_validate_age(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(validate_age(value).ok(), expected);
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height("180.5").is_ok());
        assert!(validate_height("-3").is_err());
    }
}
