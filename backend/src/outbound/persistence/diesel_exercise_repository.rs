//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! Log queries use the `(user_id, date)` index; the range is inclusive on
//! both ends and ties on `date` are broken by insertion time.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Exercise, LogQuery, NewExercise, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::DbPool;
use super::schema::exercises;

/// Diesel-backed implementation of the `ExerciseRepository` port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a repository over a shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error::<ExercisePersistenceError>)?;
        let row = NewExerciseRow::from_domain(Uuid::new_v4(), exercise);
        diesel::insert_into(exercises::table)
            .values(&row)
            .returning(ExerciseRow::as_returning())
            .get_result::<ExerciseRow>(&mut conn)
            .await
            .map(ExerciseRow::into_domain)
            .map_err(map_diesel_error)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error::<ExercisePersistenceError>)?;
        let matching = exercises::table
            .filter(exercises::user_id.eq(*user_id.as_uuid()))
            .filter(exercises::date.ge(query.range.from().as_naive()))
            .filter(exercises::date.le(query.range.to().as_naive()))
            .order((exercises::date.asc(), exercises::created_at.asc()))
            .select(ExerciseRow::as_select());
        let rows = match query.limit.get() {
            Some(limit) => {
                matching
                    .limit(i64::from(limit.get()))
                    .load::<ExerciseRow>(&mut conn)
                    .await
            }
            None => matching.load::<ExerciseRow>(&mut conn).await,
        }
        .map_err(map_diesel_error::<ExercisePersistenceError>)?;
        Ok(rows.into_iter().map(ExerciseRow::into_domain).collect())
    }
}
