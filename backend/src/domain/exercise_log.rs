//! Exercise log filtering: inclusive date ranges and optional count limits.

use std::num::NonZeroU32;

use super::{Exercise, ExerciseDate, User};

/// Inclusive calendar range. A range whose start follows its end is valid
/// and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: ExerciseDate,
    to: ExerciseDate,
}

impl DateRange {
    /// Range covering `from` through `to`. No ordering is enforced.
    pub fn new(from: ExerciseDate, to: ExerciseDate) -> Self {
        Self { from, to }
    }

    /// First day included.
    pub fn from(&self) -> ExerciseDate {
        self.from
    }

    /// Last day included.
    pub fn to(&self) -> ExerciseDate {
        self.to
    }

    /// Whether `date` falls on or between both bounds.
    pub fn contains(&self, date: ExerciseDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Maximum number of log entries to return.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::LogLimit;
///
/// assert_eq!(LogLimit::from_count(0), LogLimit::Unbounded);
/// assert_eq!(LogLimit::from_count(3).max_entries(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLimit {
    /// Return every matching entry.
    #[default]
    Unbounded,
    /// Return at most this many entries.
    AtMost(NonZeroU32),
}

impl LogLimit {
    /// Zero is treated as "no limit".
    pub fn from_count(count: u32) -> Self {
        NonZeroU32::new(count).map_or(Self::Unbounded, Self::AtMost)
    }

    /// The cap, or `None` when unbounded.
    pub fn get(self) -> Option<NonZeroU32> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(limit) => Some(limit),
        }
    }

    /// The cap as a slice length, or `None` when unbounded.
    pub fn max_entries(self) -> Option<usize> {
        self.get()
            .map(|limit| usize::try_from(limit.get()).unwrap_or(usize::MAX))
    }
}

/// Fully resolved filter passed to the exercise repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive date filter.
    pub range: DateRange,
    /// Cap applied after ordering.
    pub limit: LogLimit,
}

impl LogQuery {
    /// Combine a range and a limit.
    pub fn new(range: DateRange, limit: LogLimit) -> Self {
        Self { range, limit }
    }
}

/// A user together with the exercises matching a log query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    user: User,
    entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Pair a user with entries already filtered and truncated.
    pub fn new(user: User, entries: Vec<Exercise>) -> Self {
        Self { user, entries }
    }

    /// Owner of the log.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Matching entries ordered by date.
    pub fn entries(&self) -> &[Exercise] {
        &self.entries
    }

    /// Number of entries returned, after any limit was applied.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
