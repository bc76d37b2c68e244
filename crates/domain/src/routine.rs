use log::debug;

use crate::{
    Archetype, CreateError, DeleteError, ExerciseRepository, ExerciseSelector, Experience, Picker,
    ReadError, SessionPlan, UserID, UserProfile, Volume, build_session,
};

/// Storage of the generated plans of each user.
pub trait PlanRepository {
    fn read_plans(&self, user_id: UserID) -> Result<Vec<SessionPlan>, ReadError>;
    /// Remove every plan of the user.
    fn delete_plans(&self, user_id: UserID) -> Result<usize, DeleteError>;
    fn create_plans(
        &self,
        user_id: UserID,
        plans: Vec<SessionPlan>,
    ) -> Result<Vec<SessionPlan>, CreateError>;
}

/// Weekly split strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl Structure {
    /// Structure and number of sessions for a user.
    ///
    /// Intermediate users with fewer than three or more than six days fall back to full-body
    /// training with one session per available day.
    #[must_use]
    pub fn select(experience: Experience, days_available: u32) -> (Structure, u32) {
        match experience {
            Experience::Beginner => (Structure::FullBody, days_available.min(3)),
            Experience::Intermediate => match days_available {
                4 => (Structure::UpperLower, 4),
                3..=6 => (Structure::PushPullLegs, days_available),
                _ => (Structure::FullBody, days_available),
            },
        }
    }

    /// Name, day and archetype of each session.
    #[must_use]
    pub fn schedule(self, session_count: u32) -> Vec<(String, u32, Archetype)> {
        match self {
            Structure::FullBody => {
                let days = match session_count {
                    0 => vec![],
                    1 => vec![1],
                    2 => vec![1, 4],
                    3 => vec![1, 3, 5],
                    n => (1..=n).collect(),
                };
                days.into_iter()
                    .zip(session_letters())
                    .map(|(day, letter)| {
                        (
                            format!("{} {letter}", Archetype::FullBody.name()),
                            day,
                            Archetype::FullBody,
                        )
                    })
                    .collect()
            }
            Structure::UpperLower => vec![
                ("Upper A".to_string(), 1, Archetype::Upper),
                ("Lower A".to_string(), 2, Archetype::Lower),
                ("Upper B".to_string(), 4, Archetype::Upper),
                ("Lower B".to_string(), 5, Archetype::Lower),
            ],
            Structure::PushPullLegs => [Archetype::Push, Archetype::Pull, Archetype::Legs]
                .into_iter()
                .cycle()
                .zip(1..=session_count)
                .map(|(archetype, day)| (format!("{} {day}", archetype.name()), day, archetype))
                .collect(),
        }
    }
}

fn session_letters() -> impl Iterator<Item = char> {
    (0..).map_while(|i| char::from_u32(u32::from('A') + i))
}

/// Generate a fresh set of session plans for the profile.
///
/// The result is independent of any previously generated plans. Replacing those is up to the
/// caller.
pub fn generate_routine<C, P>(
    profile: &UserProfile,
    selector: &mut ExerciseSelector<'_, C, P>,
) -> Result<Vec<SessionPlan>, ReadError>
where
    C: ExerciseRepository + ?Sized,
    P: Picker,
{
    let (structure, session_count) = Structure::select(profile.experience, profile.days_available);
    let volume = Volume::for_goal(profile.goal);

    debug!(
        "generating {session_count} {structure:?} sessions for {} ({}, {} days)",
        *profile.user_id, profile.experience, profile.days_available
    );

    structure
        .schedule(session_count)
        .into_iter()
        .map(|(name, day, archetype)| build_session(archetype, name, day, volume, selector))
        .collect()
}
