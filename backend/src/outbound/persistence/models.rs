//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};
use crate::domain::{
    Exercise, ExerciseDate, ExerciseId, Minutes, NewExercise, User, UserId, Username,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from_uuid(row.id), Username::new(row.username))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: Option<String>,
    pub duration: Option<f64>,
    pub date: NaiveDate,
}

impl ExerciseRow {
    /// Non-finite durations are read back as absent.
    pub fn into_domain(self) -> Exercise {
        Exercise::from_new(
            ExerciseId::from_uuid(self.id),
            NewExercise {
                user_id: UserId::from_uuid(self.user_id),
                description: self.description,
                duration: self.duration.and_then(|value| Minutes::new(value).ok()),
                date: ExerciseDate::from_naive(self.date),
            },
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: Option<&'a str>,
    pub duration: Option<f64>,
    pub date: NaiveDate,
}

impl<'a> NewExerciseRow<'a> {
    pub fn from_domain(id: Uuid, exercise: &'a NewExercise) -> Self {
        Self {
            id,
            user_id: *exercise.user_id.as_uuid(),
            description: exercise.description.as_deref(),
            duration: exercise.duration.map(Minutes::get),
            date: exercise.date.as_naive(),
        }
    }
}
