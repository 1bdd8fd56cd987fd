//! Video game sales service: a session-gated dashboard over a static sales
//! dataset plus a read-only JSON statistics API.
//!
//! Layout follows a ports-and-adapters split:
//!
//! - [`domain`]: accounts, sessions, notices, and the ports they depend on
//! - [`inbound`]: Actix handlers, session plumbing, and HTML views
//! - [`outbound`]: credential file, password hashing, and dataset adapters
//! - [`server`]: application assembly shared by `main` and integration tests

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
