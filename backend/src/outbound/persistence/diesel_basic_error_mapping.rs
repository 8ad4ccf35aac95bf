//! Diesel and pool error mapping for the booking document store.
//!
//! Connection-level failures become [`BookingRepositoryError::Connection`] so
//! services can answer with 503; everything else is a query failure. Driver
//! messages are logged at debug level and replaced with fixed text so SQL
//! details never reach the domain.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::BookingRepositoryError;

use super::pool::PoolError;

/// Map pool failures into connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    BookingRepositoryError::connection(message)
}

/// Map Diesel failures into repository errors.
pub(crate) fn map_diesel_error(error: DieselError) -> BookingRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BookingRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            BookingRepositoryError::query("booking document already exists")
        }
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, _) => {
            BookingRepositoryError::query("concurrent write conflict")
        }
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            BookingRepositoryError::query("booking document encoding error")
        }
        DieselError::NotFound => BookingRepositoryError::query("record not found"),
        _ => BookingRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, BookingRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert!(matches!(
            map_diesel_error(error),
            BookingRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn unique_violation_hides_driver_message() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates mt_doc_booking_pkey".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            BookingRepositoryError::query("booking document already exists")
        );
    }

    #[rstest]
    fn other_errors_are_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::RollbackTransaction),
            BookingRepositoryError::query("database error")
        );
    }
}
