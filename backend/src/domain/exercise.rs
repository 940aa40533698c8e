//! Exercise records and their value types.
//!
//! Dates carry no time of day. Every date leaving the service is rendered as
//! `Www Mmm DD YYYY`, for example `Mon Jan 01 2024`.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::UserId;

const RENDERED_DATE_FORMAT: &str = "%a %b %d %Y";
const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
// 2^53: beyond this an f64 cannot represent every integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Errors raised while parsing exercise inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    /// The date is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("invalid date '{value}'; expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate { value: String },
    /// The duration is not a finite number.
    #[error("invalid duration '{value}'; expected a number of minutes")]
    InvalidDuration { value: String },
}

/// Calendar date an exercise was performed on.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ExerciseDate;
///
/// let date = ExerciseDate::parse("2024-01-01").expect("valid date");
/// assert_eq!(date.to_string(), "Mon Jan 01 2024");
///
/// let stamped = ExerciseDate::parse("2024-01-01T23:30:00-02:00").expect("valid timestamp");
/// assert_eq!(stamped.to_string(), "Tue Jan 02 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT) {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|stamp| Self(stamp.with_timezone(&Utc).date_naive()))
            .map_err(|_| ExerciseValidationError::InvalidDate {
                value: raw.to_owned(),
            })
    }

    /// Current UTC date according to `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Lower bound used when a log query omits `from`.
    #[must_use]
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.date_naive())
    }

    /// Wrap a calendar date read back from storage.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RENDERED_DATE_FORMAT))
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Exercise duration in minutes.
///
/// Integral values serialise without a fractional part so `30` stays `30`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Minutes(f64);

impl Minutes {
    /// Accept any finite value; no range is enforced.
    pub fn new(value: f64) -> Result<Self, ExerciseValidationError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ExerciseValidationError::InvalidDuration {
                value: value.to_string(),
            })
        }
    }

    /// Parse a numeric string such as `"30"` or `"12.5"`.
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self)
            .ok_or_else(|| ExerciseValidationError::InvalidDuration {
                value: raw.to_owned(),
            })
    }

    /// Minutes as a float.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Serialize for Minutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Unique exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Allocate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exercise awaiting persistence; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    /// Owner of the exercise.
    pub user_id: UserId,
    /// Free text; absent when the client omitted it.
    pub description: Option<String>,
    /// Absent when the client omitted it.
    pub duration: Option<Minutes>,
    /// Already resolved to today when the client omitted it.
    pub date: ExerciseDate,
}

/// Stored exercise entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    id: ExerciseId,
    user_id: UserId,
    description: Option<String>,
    duration: Option<Minutes>,
    date: ExerciseDate,
}

impl Exercise {
    /// Attach a store-assigned identifier to a pending exercise.
    pub fn from_new(id: ExerciseId, new: NewExercise) -> Self {
        let NewExercise {
            user_id,
            description,
            duration,
            date,
        } = new;
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    /// Owner of the exercise.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Free-text description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Duration in minutes, if one was given.
    pub fn duration(&self) -> Option<Minutes> {
        self.duration
    }

    /// Day the exercise was performed.
    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
