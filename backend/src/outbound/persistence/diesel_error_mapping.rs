//! Shared Diesel error mapping for the repository adapters.
//!
//! Connectivity problems (pool checkout, closed connections) become the
//! port's `Connection` variant; everything else becomes `Query`. Driver
//! detail is logged at debug level and never copied into the port error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::{ExercisePersistenceError, UserPersistenceError};

/// Port error enums that distinguish connectivity from query failures.
pub(crate) trait PersistenceFailure: Sized {
    fn connection_failure(message: String) -> Self;
    fn query_failure(message: String) -> Self;
}

impl PersistenceFailure for UserPersistenceError {
    fn connection_failure(message: String) -> Self {
        Self::connection(message)
    }

    fn query_failure(message: String) -> Self {
        Self::query(message)
    }
}

impl PersistenceFailure for ExercisePersistenceError {
    fn connection_failure(message: String) -> Self {
        Self::connection(message)
    }

    fn query_failure(message: String) -> Self {
        Self::query(message)
    }
}

/// Pool failures always mean the store is unreachable.
pub(crate) fn map_pool_error<E: PersistenceFailure>(error: PoolError) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    E::connection_failure(message)
}

pub(crate) fn map_diesel_error<E: PersistenceFailure>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => E::connection_failure("database connection error".to_owned()),
        DieselError::NotFound => E::query_failure("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query_failure("database query error".to_owned()),
        _ => E::query_failure("database error".to_owned()),
    }
}
