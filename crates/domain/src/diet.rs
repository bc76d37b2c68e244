//! Daily energy and macronutrient targets.
//!
//! BMR follows Mifflin-St Jeor (1990), scaled to TDEE by an activity factor derived from the
//! number of training days.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{CreateError, Goal, Portion, ReadError, Sex, UserID, UserProfile};

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Targets derived from a profile, truncated to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietTargets {
    pub bmr: i32,
    pub tdee: i32,
    pub target_calories: i32,
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
}

#[must_use]
pub fn calculate_diet(profile: &UserProfile) -> DietTargets {
    let bmr = bmr(profile);
    let tdee = bmr * activity_factor(profile.days_available);
    let target_calories = tdee + calorie_adjustment(profile.goal);

    let protein = profile.weight * protein_per_kg(profile.goal);
    let fat = profile.weight * fat_per_kg(profile.goal);
    let carbs = ((target_calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT)
        / KCAL_PER_G_CARBS)
        .max(0.0);

    DietTargets {
        bmr: truncate(bmr),
        tdee: truncate(tdee),
        target_calories: truncate(target_calories),
        protein: truncate(protein),
        fat: truncate(fat),
        carbs: truncate(carbs),
    }
}

#[must_use]
pub fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::MALE => base + 5.0,
        Sex::FEMALE => base - 161.0,
    }
}

#[must_use]
pub fn activity_factor(days_available: u32) -> f64 {
    match days_available {
        5.. => 1.55,
        3..=4 => 1.375,
        _ => 1.2,
    }
}

fn calorie_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -500.0,
        Goal::Hypertrophy | Goal::Strength => 300.0,
        Goal::Endurance => 0.0,
    }
}

fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 2.2,
        Goal::Hypertrophy | Goal::Strength => 2.0,
        Goal::Endurance => 1.6,
    }
}

fn fat_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 0.8,
        Goal::Hypertrophy | Goal::Strength | Goal::Endurance => 1.0,
    }
}

pub trait DietLogRepository {
    fn read_diet_log(&self, user_id: UserID) -> Result<Vec<DietLogEntry>, ReadError>;
    fn create_diet_log_entry(&self, entry: DietLogEntry) -> Result<DietLogEntry, CreateError>;
}

/// Portion of food eaten by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietLogEntry {
    pub user_id: UserID,
    pub date: DateTime<Utc>,
    pub food_name: String,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DietLogEntry {
    #[must_use]
    pub fn new(user_id: UserID, date: DateTime<Utc>, portion: &Portion) -> Self {
        Self {
            user_id,
            date,
            food_name: format!("{} ({}g)", portion.name, portion.grams),
            calories: portion.calories,
            protein: portion.protein,
            carbs: portion.carbs,
            fat: portion.fat,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DietTotals {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Sum of all entries logged on the given (UTC) date.
#[must_use]
pub fn daily_totals(entries: &[DietLogEntry], date: NaiveDate) -> DietTotals {
    entries
        .iter()
        .filter(|e| e.date.date_naive() == date)
        .fold(DietTotals::default(), |totals, e| DietTotals {
            calories: totals.calories + e.calories,
            protein: totals.protein + e.protein,
            carbs: totals.carbs + e.carbs,
            fat: totals.fat + e.fat,
        })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i32 {
    value.trunc() as i32
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Experience, FoodItem};

    use super::*;

    fn profile(sex: Sex, goal: Goal, days_available: u32) -> UserProfile {
        UserProfile {
            user_id: 1.into(),
            weight: 80.0,
            height: 180.0,
            age: 30,
            sex,
            goal,
            experience: Experience::Intermediate,
            days_available,
        }
    }

    #[test]
    fn test_calculate_diet_male_hypertrophy() {
        // bmr = 800 + 1125 - 150 + 5 = 1780, tdee = 1780 * 1.55 = 2759
        // target = 3059, carbs = (3059 - 640 - 720) / 4 = 424.75
        assert_eq!(
            calculate_diet(&profile(Sex::MALE, Goal::Hypertrophy, 5)),
            DietTargets {
                bmr: 1780,
                tdee: 2759,
                target_calories: 3059,
                protein: 160,
                fat: 80,
                carbs: 424,
            }
        );
    }

    #[test]
    fn test_calculate_diet_female_weight_loss() {
        // bmr = 800 + 1125 - 150 - 161 = 1614, tdee = 1614 * 1.2 = 1936.8
        // target = 1436.8, protein = 176, fat = 64, carbs = (1436.8 - 704 - 576) / 4 = 39.2
        assert_eq!(
            calculate_diet(&profile(Sex::FEMALE, Goal::WeightLoss, 2)),
            DietTargets {
                bmr: 1614,
                tdee: 1936,
                target_calories: 1436,
                protein: 176,
                fat: 64,
                carbs: 39,
            }
        );
    }

    #[test]
    fn test_calculate_diet_endurance() {
        // tdee = 1780 * 1.375 = 2447.5, protein = 128, fat = 80
        // carbs = (2447.5 - 512 - 720) / 4 = 303.875
        assert_eq!(
            calculate_diet(&profile(Sex::MALE, Goal::Endurance, 3)),
            DietTargets {
                bmr: 1780,
                tdee: 2447,
                target_calories: 2447,
                protein: 128,
                fat: 80,
                carbs: 303,
            }
        );
    }

    #[test]
    fn test_calculate_diet_carbs_not_negative() {
        let targets = calculate_diet(&UserProfile {
            weight: 200.0,
            height: 100.0,
            age: 90,
            ..profile(Sex::FEMALE, Goal::WeightLoss, 1)
        });
        assert_eq!(targets.carbs, 0);
    }

    #[rstest]
    #[case(0, 1.2)]
    #[case(2, 1.2)]
    #[case(3, 1.375)]
    #[case(4, 1.375)]
    #[case(5, 1.55)]
    #[case(7, 1.55)]
    fn test_activity_factor(#[case] days_available: u32, #[case] expected: f64) {
        assert_approx_eq!(activity_factor(days_available), expected);
    }

    #[rstest]
    #[case(Sex::MALE, 1780.0)]
    #[case(Sex::FEMALE, 1614.0)]
    fn test_bmr(#[case] sex: Sex, #[case] expected: f64) {
        assert_approx_eq!(bmr(&profile(sex, Goal::Strength, 3)), expected);
    }

    fn entry(day: u32, hour: u32, calories: i32, protein: f64) -> DietLogEntry {
        DietLogEntry {
            user_id: 1.into(),
            date: Utc.with_ymd_and_hms(2024, 5, day, hour, 30, 0).unwrap(),
            food_name: "Oats (50g)".to_string(),
            calories,
            protein,
            carbs: 30.0,
            fat: 3.5,
        }
    }

    #[test]
    fn test_daily_totals() {
        let entries = [
            entry(1, 23, 500, 10.0),
            entry(2, 0, 190, 6.5),
            entry(2, 12, 310, 20.0),
            entry(3, 8, 250, 4.0),
        ];
        let totals = daily_totals(&entries, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());

        assert_eq!(totals.calories, 500);
        assert_approx_eq!(totals.protein, 26.5);
        assert_approx_eq!(totals.carbs, 60.0);
        assert_approx_eq!(totals.fat, 7.0);
    }

    #[test]
    fn test_daily_totals_no_entries() {
        assert_eq!(
            daily_totals(&[entry(1, 8, 300, 5.0)], NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()),
            DietTotals::default()
        );
    }

    #[test]
    fn test_diet_log_entry_new() {
        let portion = FoodItem {
            name: "Rice".to_string(),
            calories: 130.0,
            protein: 2.6,
            carbs: 28.2,
            fat: 0.4,
        }
        .portion(150.0);
        let date = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();

        assert_eq!(
            DietLogEntry::new(1.into(), date, &portion),
            DietLogEntry {
                user_id: 1.into(),
                date,
                food_name: "Rice (150g)".to_string(),
                calories: 195,
                protein: portion.protein,
                carbs: portion.carbs,
                fat: portion.fat,
            }
        );
    }
}
