//! Exercise API handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises {"description":"run","duration":30,"date":"2024-01-01"}
//! GET /api/users/{id}/logs?from=2024-01-01&to=2024-01-31&limit=10
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddExerciseRequest, ExerciseLogRequest};
use crate::domain::{
    Error, Exercise, ExerciseDate, ExerciseLog, LogLimit, Minutes, USER_NOT_FOUND, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::payload::{JsonOrForm, LenientNumber, non_empty};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users/{id}/exercises`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddExerciseBody {
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Minutes, as a number or numeric string.
    #[schema(value_type = Option<f64>, example = 30)]
    pub duration: Option<LenientNumber>,
    /// `YYYY-MM-DD` or RFC 3339; defaults to today.
    #[schema(example = "2024-01-01")]
    pub date: Option<String>,
}

/// Exercise returned by `POST /api/users/{id}/exercises`.
///
/// `id` is the owning user's identifier.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub duration: Option<Minutes>,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
}

/// One entry of an exercise log.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntryResponse {
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub duration: Option<Minutes>,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
}

impl From<&Exercise> for LogEntryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description().map(str::to_owned),
            duration: exercise.duration(),
            date: exercise.date().to_string(),
        }
    }
}

/// Body of `GET /api/users/{id}/logs`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseLogResponse {
    pub username: String,
    pub id: String,
    /// Number of entries in `log`.
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

impl From<&ExerciseLog> for ExerciseLogResponse {
    fn from(log: &ExerciseLog) -> Self {
        Self {
            username: log.user().username().to_string(),
            id: log.user().id().to_string(),
            count: log.count(),
            log: log.entries().iter().map(LogEntryResponse::from).collect(),
        }
    }
}

/// Query parameters accepted by `GET /api/users/{id}/logs`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogParams {
    /// Inclusive lower bound; defaults to 1970-01-01.
    pub from: Option<String>,
    /// Inclusive upper bound; defaults to today.
    pub to: Option<String>,
    /// Maximum number of entries; `0` or empty means no limit.
    pub limit: Option<String>,
}

/// Record an exercise for an existing user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User identifier")),
    request_body(content = AddExerciseBody, description = "JSON or URL-encoded form"),
    responses(
        (status = 201, description = "Exercise recorded", body = ExerciseResponse),
        (status = 400, description = "Invalid duration or date", body = ErrorEnvelope),
        (status = 404, description = "Unknown user", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonOrForm<AddExerciseBody>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path)?;
    let body = payload.into_inner();
    let request = AddExerciseRequest {
        user_id,
        description: body.description,
        duration: parse_duration(body.duration)?,
        date: parse_date("date", body.date)?,
    };
    let logged = state.exercises.add_exercise(request).await?;
    Ok(HttpResponse::Created().json(ExerciseResponse {
        id: logged.user.id().to_string(),
        username: logged.user.username().to_string(),
        description: logged.exercise.description().map(str::to_owned),
        duration: logged.exercise.duration(),
        date: logged.exercise.date().to_string(),
    }))
}

/// Fetch a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User identifier"), LogParams),
    responses(
        (status = 200, description = "Exercise log", body = ExerciseLogResponse),
        (status = 400, description = "Invalid date or limit", body = ErrorEnvelope),
        (status = 404, description = "Unknown user", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["exercises"],
    operation_id = "getUserLogs"
)]
#[get("/users/{id}/logs")]
pub async fn user_logs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<LogParams>,
) -> ApiResult<web::Json<ExerciseLogResponse>> {
    let user_id = parse_user_id(&path)?;
    let LogParams { from, to, limit } = params.into_inner();
    let request = ExerciseLogRequest {
        user_id,
        from: parse_date("from", from)?,
        to: parse_date("to", to)?,
        limit: parse_limit(limit)?,
    };
    let log = state.exercise_log.user_log(request).await?;
    Ok(web::Json(ExerciseLogResponse::from(&log)))
}

// Malformed identifiers cannot match any stored user.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found(USER_NOT_FOUND))
}

fn parse_duration(value: Option<LenientNumber>) -> Result<Option<Minutes>, Error> {
    let parsed = match value {
        None => return Ok(None),
        Some(LenientNumber::Number(number)) => Minutes::new(number),
        Some(LenientNumber::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(LenientNumber::Text(text)) => Minutes::parse(&text),
    };
    parsed
        .map(Some)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<ExerciseDate>, Error> {
    non_empty(value)
        .map(|raw| ExerciseDate::parse(&raw))
        .transpose()
        .map_err(|err| Error::invalid_request(format!("{field}: {err}")))
}

fn parse_limit(value: Option<String>) -> Result<LogLimit, Error> {
    let Some(raw) = non_empty(value) else {
        return Ok(LogLimit::Unbounded);
    };
    raw.trim()
        .parse::<u32>()
        .map(LogLimit::from_count)
        .map_err(|_| Error::invalid_request("limit must be a non-negative integer"))
}
