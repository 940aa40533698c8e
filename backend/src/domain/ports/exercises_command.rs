//! Driving port for recording exercises.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, ExerciseDate, Minutes, User, UserId};

/// Validated input for [`ExercisesCommand::add_exercise`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddExerciseRequest {
    pub user_id: UserId,
    pub description: Option<String>,
    pub duration: Option<Minutes>,
    /// `None` stamps the current date.
    pub date: Option<ExerciseDate>,
}

/// A freshly stored exercise together with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}

/// Domain use-case port for adding exercises to a user's log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExercisesCommand: Send + Sync {
    /// Store an exercise for an existing user.
    ///
    /// Fails with `not_found` when the user does not exist, in which case
    /// nothing is stored.
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<LoggedExercise, Error>;
}
