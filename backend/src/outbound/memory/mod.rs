//! Process-local booking document store.
//!
//! Used when no database URL is configured and by handler tests. Documents
//! are held in a map guarded by an `RwLock` that is only held for the
//! duration of a single operation, so no lock is ever held across an await.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{BookingRepository, BookingRepositoryError, BookingSlice};
use crate::domain::{Booking, BookingId};

/// In-memory [`BookingRepository`] adapter.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    documents: RwLock<HashMap<BookingId, Booking>>,
}

fn poisoned() -> BookingRepositoryError {
    BookingRepositoryError::query("in-memory booking store lock poisoned")
}

impl InMemoryBookingRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        let mut bookings: Vec<Booking> = documents.values().cloned().collect();
        bookings.sort_by_key(|booking| Reverse((booking.created_at(), booking.id())));
        Ok(bookings)
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn add(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        if documents.contains_key(&booking.id()) {
            return Err(BookingRepositoryError::query(format!(
                "booking {} already exists",
                booking.id()
            )));
        }
        documents.insert(booking.id(), booking.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        self.sorted()
    }

    async fn list_page(&self, page: PageRequest) -> Result<BookingSlice, BookingRepositoryError> {
        let bookings = self.sorted()?;
        let total_count = u64::try_from(bookings.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(BookingSlice {
            bookings: bookings.into_iter().skip(offset).take(limit).collect(),
            total_count,
        })
    }
}
