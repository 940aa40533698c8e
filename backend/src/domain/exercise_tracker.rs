//! Exercise tracking service.
//!
//! Implements every driving port on top of the two driven repositories:
//! - user registration and listing;
//! - exercise creation, stamped with today's date when none is supplied;
//! - log retrieval with inclusive date bounds and an optional limit.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::error;

use crate::domain::ports::{
    AddExerciseRequest, ExerciseLogQuery, ExerciseLogRequest, ExercisePersistenceError,
    ExerciseRepository, ExercisesCommand, LoggedExercise, UserPersistenceError, UserRepository,
    UsersCommand, UsersQuery,
};
use crate::domain::{
    DateRange, Error, ExerciseDate, ExerciseLog, LogQuery, NewExercise, User, UserId, Username,
};

/// Message reported when a path references an unknown user.
pub const USER_NOT_FOUND: &str = "user not found";

/// Domain service backing the HTTP adapter.
#[derive(Clone)]
pub struct ExerciseTracker {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    clock: Arc<dyn Clock>,
}

impl ExerciseTracker {
    /// Build the service over its repositories and a clock used to resolve "today".
    pub fn new(
        users: Arc<dyn UserRepository>,
        exercises: Arc<dyn ExerciseRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }

    async fn require_user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl UsersCommand for ExerciseTracker {
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        self.users.create(&username).await.map_err(map_user_error)
    }
}

#[async_trait]
impl UsersQuery for ExerciseTracker {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }
}

#[async_trait]
impl ExercisesCommand for ExerciseTracker {
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<LoggedExercise, Error> {
        let user = self.require_user(&request.user_id).await?;
        let new = NewExercise {
            user_id: *user.id(),
            description: request.description,
            duration: request.duration,
            date: request
                .date
                .unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref())),
        };
        let exercise = self
            .exercises
            .create(&new)
            .await
            .map_err(map_exercise_error)?;
        Ok(LoggedExercise { user, exercise })
    }
}

#[async_trait]
impl ExerciseLogQuery for ExerciseTracker {
    async fn user_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let user = self.require_user(&request.user_id).await?;
        let range = DateRange::new(
            request.from.unwrap_or_else(ExerciseDate::epoch),
            request
                .to
                .unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref())),
        );
        let query = LogQuery::new(range, request.limit);
        let mut entries = self
            .exercises
            .find_for_user(user.id(), &query)
            .await
            .map_err(map_exercise_error)?;
        // `count` never exceeds the requested limit.
        if let Some(max) = query.limit.max_entries() {
            entries.truncate(max);
        }
        Ok(ExerciseLog::new(user, entries))
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    error!(%error, "user repository failure");
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store query failed: {message}"))
        }
    }
}

fn map_exercise_error(error: ExercisePersistenceError) -> Error {
    error!(%error, "exercise repository failure");
    match error {
        ExercisePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("exercise store unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise store query failed: {message}"))
        }
    }
}

#[cfg(test)]
mod tests;
