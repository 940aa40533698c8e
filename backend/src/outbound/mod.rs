//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM.
//! - **memory**: process-local store for database-less runs and tests.
//!
//! Adapters convert between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
