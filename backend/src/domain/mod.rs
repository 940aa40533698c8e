//! Domain primitives, ports and the exercise tracking service.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failures.
//! - `User`, `UserId`, `Username`: registered users.
//! - `Exercise`, `ExerciseDate`, `Minutes`: logged activity.
//! - `DateRange`, `LogLimit`, `LogQuery`, `ExerciseLog`: log filtering.
//! - `ExerciseTracker`: implementation of the driving ports in [`ports`].
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod exercise;
pub mod exercise_log;
pub mod exercise_tracker;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    Exercise, ExerciseDate, ExerciseId, ExerciseValidationError, Minutes, NewExercise,
};
pub use self::exercise_log::{DateRange, ExerciseLog, LogLimit, LogQuery};
pub use self::exercise_tracker::{ExerciseTracker, USER_NOT_FOUND};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
