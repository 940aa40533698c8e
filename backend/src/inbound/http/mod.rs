//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod exercises;
pub mod health;
pub mod landing;
pub mod payload;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor error handlers and the `/api` routes.
///
/// Callers supply [`state::HttpState`] as `web::Data`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use exercise_tracker::inbound::http;
///
/// let app = App::new().service(web::scope("/api").configure(http::configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(error::json_error_handler),
    )
    .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
    .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
    .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
    .service(users::create_user)
    .service(users::list_users)
    .service(exercises::add_exercise)
    .service(exercises::user_logs);
}

/// Register the landing page and stylesheet at the application root.
pub fn configure_landing(cfg: &mut web::ServiceConfig) {
    cfg.service(landing::index).service(landing::stylesheet);
}
