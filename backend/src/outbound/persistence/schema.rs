//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Uuid,
        /// Stored verbatim; not unique.
        username -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises. `user_id` is not a foreign key.
    exercises (id) {
        id -> Uuid,
        user_id -> Uuid,
        description -> Nullable<Text>,
        /// Minutes.
        duration -> Nullable<Float8>,
        date -> Date,
        /// Insertion time; breaks ties between same-day entries.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, exercises);
