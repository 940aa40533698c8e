//! Process-local store implementing both repository ports.
//!
//! Used when no database is configured and by tests. Records live in
//! insertion-ordered vectors behind a `std::sync::RwLock`; the lock is only
//! held for the duration of a single synchronous operation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Exercise, ExerciseId, LogQuery, NewExercise, User, UserId, Username,
};

const POISONED: &str = "in-memory store lock poisoned";

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Shared in-memory store. Clones share the same tables.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
/// use exercise_tracker::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let users: Arc<dyn UserRepository> = Arc::new(store.clone());
/// let exercises: Arc<dyn ExerciseRepository> = Arc::new(store);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored exercises across all users.
    pub fn exercise_count(&self) -> usize {
        self.tables
            .read()
            .map_or(0, |tables| tables.exercises.len())
    }
}

fn user_lock_error<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query(POISONED)
}

fn exercise_lock_error<T>(_: PoisonError<T>) -> ExercisePersistenceError {
    ExercisePersistenceError::query(POISONED)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, username: &Username) -> Result<User, UserPersistenceError> {
        let user = User::new(UserId::random(), username.clone());
        let mut tables = self.tables.write().map_err(user_lock_error)?;
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().map_err(user_lock_error)?;
        Ok(tables.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.tables.read().map_err(user_lock_error)?;
        Ok(tables.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError> {
        let stored = Exercise::from_new(ExerciseId::random(), exercise.clone());
        let mut tables = self.tables.write().map_err(exercise_lock_error)?;
        tables.exercises.push(stored.clone());
        Ok(stored)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut matches: Vec<Exercise> = {
            let tables = self.tables.read().map_err(exercise_lock_error)?;
            tables
                .exercises
                .iter()
                .filter(|exercise| {
                    exercise.user_id() == user_id && query.range.contains(exercise.date())
                })
                .cloned()
                .collect()
        };
        // Stable sort keeps insertion order among same-day entries.
        matches.sort_by_key(Exercise::date);
        if let Some(max) = query.limit.max_entries() {
            matches.truncate(max);
        }
        Ok(matches)
    }
}
