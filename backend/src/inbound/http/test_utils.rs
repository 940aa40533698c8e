//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{
    MockExerciseLogQuery, MockExercisesCommand, MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Driving port mocks; ports a test leaves untouched reject every call.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub exercises: MockExercisesCommand,
    pub exercise_log: MockExerciseLogQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users),
            Arc::new(self.users_query),
            Arc::new(self.exercises),
            Arc::new(self.exercise_log),
        )
    }
}

/// Application exposing the `/api` routes over `ports`, wrapped in [`Trace`].
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
}

/// Extract `error.kind` from an error envelope.
pub fn error_kind(body: &Value) -> Option<&str> {
    body.get("error")?.get("kind")?.as_str()
}
