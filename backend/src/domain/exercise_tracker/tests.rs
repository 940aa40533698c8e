//! Unit tests for the exercise tracking service.

use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockExerciseRepository, MockUserRepository};
use crate::domain::{ErrorCode, Exercise, ExerciseId, LogLimit, Minutes};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    let utc_now = Utc
        .with_ymd_and_hms(2024, 3, 15, 23, 59, 0)
        .single()
        .expect("valid fixture timestamp");
    Arc::new(FixtureClock { utc_now })
}

#[fixture]
fn alice() -> User {
    User::new(UserId::random(), Username::new("alice"))
}

fn date(raw: &str) -> ExerciseDate {
    ExerciseDate::parse(raw).expect("valid date")
}

fn tracker(
    users: MockUserRepository,
    exercises: MockExerciseRepository,
    clock: Arc<dyn Clock>,
) -> ExerciseTracker {
    ExerciseTracker::new(Arc::new(users), Arc::new(exercises), clock)
}

fn users_returning(user: Option<User>) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |_| Ok(user.clone()));
    users
}

fn stored(new: &NewExercise) -> Exercise {
    Exercise::from_new(ExerciseId::random(), new.clone())
}

#[rstest]
#[tokio::test]
async fn create_user_returns_stored_user(clock: Arc<dyn Clock>, alice: User) {
    let mut users = MockUserRepository::new();
    let expected = alice.clone();
    users
        .expect_create()
        .withf(|name| name.as_ref() == "alice")
        .times(1)
        .returning(move |_| Ok(expected.clone()));

    let service = tracker(users, MockExerciseRepository::new(), clock);
    let created = service
        .create_user(Username::new("alice"))
        .await
        .expect("user created");
    assert_eq!(created, alice);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax error"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_users_maps_persistence_errors(
    clock: Arc<dyn Clock>,
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users.expect_list().returning(move || Err(failure.clone()));

    let service = tracker(users, MockExerciseRepository::new(), clock);
    let err = service.list_users().await.expect_err("list fails");
    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn add_exercise_for_unknown_user_stores_nothing(clock: Arc<dyn Clock>) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_create().never();

    let service = tracker(users_returning(None), exercises, clock);
    let err = service
        .add_exercise(AddExerciseRequest {
            user_id: UserId::random(),
            description: Some("run".into()),
            duration: Some(Minutes::new(30.0).expect("finite")),
            date: None,
        })
        .await
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), USER_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn add_exercise_defaults_date_to_today(clock: Arc<dyn Clock>, alice: User) {
    let captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_create().times(1).returning(move |new| {
        *sink.lock().expect("capture lock") = Some(new.clone());
        Ok(stored(new))
    });

    let service = tracker(users_returning(Some(alice.clone())), exercises, clock);
    let logged = service
        .add_exercise(AddExerciseRequest {
            user_id: *alice.id(),
            description: Some("run".into()),
            duration: Some(Minutes::new(30.0).expect("finite")),
            date: None,
        })
        .await
        .expect("exercise added");

    assert_eq!(logged.user, alice);
    assert_eq!(logged.exercise.date().to_string(), "Fri Mar 15 2024");
    let new = captured
        .lock()
        .expect("capture lock")
        .clone()
        .expect("create called");
    assert_eq!(new.user_id, *alice.id());
    assert_eq!(new.description.as_deref(), Some("run"));
}

#[rstest]
#[tokio::test]
async fn add_exercise_keeps_explicit_date(clock: Arc<dyn Clock>, alice: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_create()
        .withf(|new| new.date == ExerciseDate::parse("2024-01-01").expect("valid date"))
        .returning(|new| Ok(stored(new)));

    let service = tracker(users_returning(Some(alice.clone())), exercises, clock);
    let logged = service
        .add_exercise(AddExerciseRequest {
            user_id: *alice.id(),
            description: None,
            duration: None,
            date: Some(date("2024-01-01")),
        })
        .await
        .expect("exercise added");
    assert_eq!(logged.exercise.date().to_string(), "Mon Jan 01 2024");
}

#[rstest]
#[tokio::test]
async fn add_exercise_maps_connection_failure(clock: Arc<dyn Clock>, alice: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_create()
        .returning(|_| Err(ExercisePersistenceError::connection("pool timed out")));

    let service = tracker(users_returning(Some(alice.clone())), exercises, clock);
    let err = service
        .add_exercise(AddExerciseRequest {
            user_id: *alice.id(),
            description: None,
            duration: None,
            date: None,
        })
        .await
        .expect_err("store down");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn user_log_resolves_default_bounds(clock: Arc<dyn Clock>, alice: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_for_user()
        .withf(|_, query| {
            query.range == DateRange::new(ExerciseDate::epoch(), date("2024-03-15"))
                && query.limit == LogLimit::Unbounded
        })
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let service = tracker(users_returning(Some(alice.clone())), exercises, clock);
    let log = service
        .user_log(ExerciseLogRequest {
            user_id: *alice.id(),
            from: None,
            to: None,
            limit: LogLimit::Unbounded,
        })
        .await
        .expect("log fetched");
    assert_eq!(log.user(), &alice);
    assert_eq!(log.count(), 0);
}

#[rstest]
#[tokio::test]
async fn user_log_truncates_to_limit(clock: Arc<dyn Clock>, alice: User) {
    let owner = *alice.id();
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_for_user().returning(move |_, _| {
        Ok(["2024-01-01", "2024-01-02", "2024-01-03"]
            .into_iter()
            .map(|raw| {
                stored(&NewExercise {
                    user_id: owner,
                    description: None,
                    duration: None,
                    date: date(raw),
                })
            })
            .collect())
    });

    let service = tracker(users_returning(Some(alice.clone())), exercises, clock);
    let log = service
        .user_log(ExerciseLogRequest {
            user_id: owner,
            from: None,
            to: None,
            limit: LogLimit::AtMost(NonZeroU32::MIN),
        })
        .await
        .expect("log fetched");
    assert_eq!(log.count(), 1);
    assert_eq!(log.entries()[0].date(), date("2024-01-01"));
}

#[rstest]
#[tokio::test]
async fn user_log_for_unknown_user_is_not_found(clock: Arc<dyn Clock>) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_for_user().never();

    let service = tracker(users_returning(None), exercises, clock);
    let err = service
        .user_log(ExerciseLogRequest {
            user_id: UserId::random(),
            from: None,
            to: None,
            limit: LogLimit::Unbounded,
        })
        .await
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
