//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ExerciseTracker;
use crate::domain::ports::{ExerciseLogQuery, ExercisesCommand, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExercisesCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExercisesCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }

    /// Route every port through a single tracker service.
    pub fn from_tracker(tracker: ExerciseTracker) -> Self {
        let tracker = Arc::new(tracker);
        Self::new(
            tracker.clone(),
            tracker.clone(),
            tracker.clone(),
            tracker,
        )
    }
}
