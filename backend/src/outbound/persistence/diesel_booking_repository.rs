//! PostgreSQL-backed `BookingRepository` storing bookings as JSONB documents.
//!
//! Each booking lives in `mt_doc_booking` as one document. Creating a booking
//! also appends a `booking_created` event to `mt_events` in the same
//! transaction, so either both rows exist or neither does.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use pagination::PageRequest;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{BookingRepository, BookingRepositoryError, BookingSlice};
use crate::domain::{Booking, BookingCreated, BookingId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookingDocument, BookingDocumentRow, NewBookingDocumentRow, NewEventRow};
use super::pool::DbPool;
use super::schema::{mt_doc_booking, mt_events};

/// Diesel-backed implementation of the `BookingRepository` port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, BookingRepositoryError> {
    serde_json::to_value(value)
        .map_err(|err| BookingRepositoryError::query(format!("failed to encode document: {err}")))
}

fn row_to_booking(row: BookingDocumentRow) -> Result<Booking, BookingRepositoryError> {
    let document: BookingDocument = serde_json::from_value(row.data).map_err(|err| {
        BookingRepositoryError::query(format!("malformed booking document {}: {err}", row.id))
    })?;
    Ok(document.into())
}

fn rows_to_bookings(rows: Vec<BookingDocumentRow>) -> Result<Vec<Booking>, BookingRepositoryError> {
    rows.into_iter().map(row_to_booking).collect()
}

/// Clamp a paging bound into `BIGINT` range. Offsets that large always
/// address past the end of the table.
fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn add(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let document = encode(&BookingDocument::from(booking))?;
        let event = encode(&BookingCreated::from(booking))?;
        let id = *booking.id().as_uuid();
        let created_at = booking.created_at();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(mt_doc_booking::table)
                    .values(NewBookingDocumentRow {
                        id,
                        data: &document,
                        created_at,
                        mt_last_modified: created_at,
                    })
                    .execute(conn)
                    .await?;
                diesel::insert_into(mt_events::table)
                    .values(NewEventRow {
                        id: Uuid::new_v4(),
                        stream_id: id,
                        event_type: BookingCreated::EVENT_TYPE,
                        data: &event,
                        timestamp: created_at,
                    })
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)?;

        debug!(booking_id = %id, "stored booking document");
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BookingDocumentRow> = mt_doc_booking::table
            .filter(mt_doc_booking::id.eq(id.as_uuid()))
            .select(BookingDocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_booking).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BookingDocumentRow> = mt_doc_booking::table
            .order_by((mt_doc_booking::created_at.desc(), mt_doc_booking::id.desc()))
            .select(BookingDocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_bookings(rows)
    }

    async fn list_page(&self, page: PageRequest) -> Result<BookingSlice, BookingRepositoryError> {
        let offset = to_sql_bound(page.offset());
        let limit = to_sql_bound(page.limit());

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (total, rows) = conn
            .transaction(|conn| {
                async move {
                    let total: i64 = mt_doc_booking::table.count().get_result(conn).await?;
                    let rows: Vec<BookingDocumentRow> = mt_doc_booking::table
                        .order_by((mt_doc_booking::created_at.desc(), mt_doc_booking::id.desc()))
                        .select(BookingDocumentRow::as_select())
                        .offset(offset)
                        .limit(limit)
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((total, rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(BookingSlice {
            bookings: rows_to_bookings(rows)?,
            total_count: u64::try_from(total).unwrap_or_default(),
        })
    }
}
