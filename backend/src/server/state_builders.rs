//! Builders for HTTP state backed by the configured repositories.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use exercise_tracker::domain::ExerciseTracker;
use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::outbound::persistence::{
    DbPool, DieselExerciseRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Repository pair shared by the tracker service.
struct Repositories {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
}

impl Repositories {
    fn diesel(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            exercises: Arc::new(DieselExerciseRepository::new(pool.clone())),
        }
    }

    fn memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            exercises: Arc::new(store),
        }
    }
}

/// Build the shared HTTP state, choosing PostgreSQL repositories when a pool
/// is configured and the in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repositories = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "repositories configured");
            Repositories::diesel(pool)
        }
        None => {
            info!(store = "memory", "repositories configured");
            Repositories::memory()
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let tracker = ExerciseTracker::new(repositories.users, repositories.exercises, clock);
    web::Data::new(HttpState::from_tracker(tracker))
}
