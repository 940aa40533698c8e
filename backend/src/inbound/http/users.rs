//! Users API handlers.
//!
//! ```text
//! POST /api/users {"username":"alice"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::payload::JsonOrForm;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`, as JSON or a URL-encoded form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Required; stored verbatim. Empty strings are accepted.
    #[schema(example = "alice")]
    pub username: Option<String>,
}

/// User projection returned by the users endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserRequest,
        description = "JSON or URL-encoded form"
    ),
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing username", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let username = payload
        .into_inner()
        .username
        .ok_or_else(|| Error::invalid_request("username is required"))?;
    let user = state.users.create_user(Username::new(username)).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// List every registered user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}
