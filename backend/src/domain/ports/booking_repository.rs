//! Port abstraction for booking document storage.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Booking, BookingId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
    }
}

/// One slice of bookings plus the size of the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSlice {
    /// Bookings on the requested page, newest first.
    pub bookings: Vec<Booking>,
    /// Number of bookings across all pages.
    pub total_count: u64,
}

/// Port for storing and reading booking documents.
///
/// Listing operations order by `created_at` descending and break ties by id
/// descending so repeated reads page consistently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking.
    async fn add(&self, booking: &Booking) -> Result<(), BookingRepositoryError>;

    /// Find a booking by id.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Read every booking.
    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Read one page of bookings.
    async fn list_page(&self, page: PageRequest) -> Result<BookingSlice, BookingRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingRepository;

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn add(&self, _booking: &Booking) -> Result<(), BookingRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_page(&self, _page: PageRequest) -> Result<BookingSlice, BookingRepositoryError> {
        Ok(BookingSlice::default())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureBookingRepository;
        let found = repo
            .find_by_id(&BookingId::random())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_page_is_empty() {
        let repo = FixtureBookingRepository;
        let slice = repo
            .list_page(PageRequest::default())
            .await
            .expect("fixture page succeeds");
        assert!(slice.bookings.is_empty());
        assert_eq!(slice.total_count, 0);
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = BookingRepositoryError::connection("pool exhausted");
        assert_eq!(
            err.to_string(),
            "booking repository connection failed: pool exhausted"
        );
    }
}
