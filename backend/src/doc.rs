//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the annotated handlers of the inbound HTTP layer
//! together with their request, response and error schemas. Debug builds
//! serve it at `/api-docs/openapi.json` alongside Swagger UI at `/docs`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::exercises::{
    AddExerciseBody, ExerciseLogResponse, ExerciseResponse, LogEntryResponse,
};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Create users, record exercises and query exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::user_logs,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        Error,
        ErrorCode,
        CreateUserRequest,
        UserResponse,
        AddExerciseBody,
        ExerciseResponse,
        LogEntryResponse,
        ExerciseLogResponse,
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise recording and logs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
