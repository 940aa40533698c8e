//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseDate, ExerciseLog, LogLimit, UserId};

/// Log filter as supplied by the caller; missing bounds are resolved by the
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: UserId,
    /// Defaults to 1970-01-01.
    pub from: Option<ExerciseDate>,
    /// Defaults to today.
    pub to: Option<ExerciseDate>,
    pub limit: LogLimit,
}

/// Domain use-case port for fetching exercise logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    async fn user_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}
