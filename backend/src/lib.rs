//! Hotel booking backend library.
//!
//! The crate is laid out hexagonally:
//!
//! - [`domain`] holds the booking entity, validation rules, services, and the
//!   ports they depend on.
//! - [`inbound`] adapts HTTP requests onto the domain's driving ports.
//! - [`outbound`] implements the storage port against PostgreSQL documents or
//!   process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
