//! PostgreSQL document store for bookings.
//!
//! Bookings are stored whole as JSONB documents with their creation events
//! appended to an event table in the same transaction. Access goes through
//! `diesel-async` on a `bb8` pool; schema changes ship as embedded Diesel
//! migrations.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Only the repository, the pool and the migration runner are
//! exported.
//!
//! ```ignore
//! use hotel_booking::outbound::persistence::{DbPool, DieselBookingRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookings")).await?;
//! let repo = DieselBookingRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_booking_repository::DieselBookingRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
