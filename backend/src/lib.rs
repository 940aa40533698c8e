//! Exercise tracker library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the model, ports and
//! service; `inbound::http` adapts the service to actix-web; `outbound` holds
//! the PostgreSQL and in-memory repository adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Cors, Trace};
