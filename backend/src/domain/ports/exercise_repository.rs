//! Driven port for exercise persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Exercise, LogQuery, NewExercise, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// The store could not be reached.
        Connection => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "exercise repository query failed: {message}",
    }
}

/// Storage for exercise entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new exercise; the adapter assigns its identifier.
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError>;

    /// Exercises owned by `user_id` whose date falls inside `query.range`,
    /// ordered by date then insertion, truncated to `query.limit`.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
