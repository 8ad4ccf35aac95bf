//! Outbound adapters implementing the booking repository port.
//!
//! - **persistence**: PostgreSQL JSONB document store via Diesel
//! - **memory**: process-local store used when no database is configured
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
