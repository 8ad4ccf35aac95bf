//! Internal persistence models for the booking document store.
//!
//! [`BookingDocument`] is the JSON shape written to `mt_doc_booking.data`.
//! It is versioned independently of the HTTP DTOs so stored documents stay
//! readable when the API changes.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Booking, BookingDraft, BookingId, BookingStatus};

use super::schema::{mt_doc_booking, mt_events};

/// JSON body of a stored booking.
///
/// Amounts are stored as decimal strings to keep exact precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingDocument {
    pub id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<&Booking> for BookingDocument {
    fn from(booking: &Booking) -> Self {
        Self {
            id: *booking.id().as_uuid(),
            guest_name: booking.guest_name().to_owned(),
            guest_email: booking.guest_email().to_owned(),
            guest_phone: booking.guest_phone().to_owned(),
            room_id: booking.room_id().to_owned(),
            check_in_date: booking.check_in_date(),
            check_out_date: booking.check_out_date(),
            number_of_guests: booking.number_of_guests(),
            total_amount: booking.total_amount(),
            status: booking.status(),
            created_at: booking.created_at(),
            updated_at: booking.updated_at(),
            notes: booking.notes().map(str::to_owned),
        }
    }
}

impl From<BookingDocument> for Booking {
    fn from(document: BookingDocument) -> Self {
        Self::restore(
            BookingId::from_uuid(document.id),
            BookingDraft {
                guest_name: document.guest_name,
                guest_email: document.guest_email,
                guest_phone: document.guest_phone,
                room_id: document.room_id,
                check_in_date: document.check_in_date,
                check_out_date: document.check_out_date,
                number_of_guests: document.number_of_guests,
                total_amount: document.total_amount,
                notes: document.notes,
            },
            document.status,
            document.created_at,
            document.updated_at,
        )
    }
}

/// Row read from `mt_doc_booking`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mt_doc_booking)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingDocumentRow {
    pub id: Uuid,
    pub data: serde_json::Value,
}

/// Row written to `mt_doc_booking`.
#[derive(Debug, Insertable)]
#[diesel(table_name = mt_doc_booking)]
pub(crate) struct NewBookingDocumentRow<'a> {
    pub id: Uuid,
    pub data: &'a serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub mt_last_modified: DateTime<Utc>,
}

/// Row appended to `mt_events`.
#[derive(Debug, Insertable)]
#[diesel(table_name = mt_events)]
pub(crate) struct NewEventRow<'a> {
    pub id: Uuid,
    pub stream_id: Uuid,
    pub event_type: &'a str,
    pub data: &'a serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the stored document shape.

    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn booking() -> Booking {
        Booking::pending(
            BookingId::from_uuid(Uuid::nil()),
            BookingDraft {
                guest_name: "Annie Easley".to_owned(),
                guest_email: "annie@example.com".to_owned(),
                guest_phone: "216-555-0142".to_owned(),
                room_id: "C-3".to_owned(),
                check_in_date: NaiveDate::from_ymd_opt(2030, 4, 1).expect("date"),
                check_out_date: NaiveDate::from_ymd_opt(2030, 4, 5).expect("date"),
                number_of_guests: 2,
                total_amount: Decimal::new(120_050, 2),
                notes: None,
            },
            Utc.with_ymd_and_hms(2030, 3, 1, 10, 0, 0)
                .single()
                .expect("timestamp"),
        )
    }

    #[rstest]
    fn document_uses_camel_case_and_exact_amount() {
        let value = serde_json::to_value(BookingDocument::from(&booking())).expect("serialise");
        assert_eq!(value["totalAmount"], json!("1200.50"));
        assert_eq!(value["checkInDate"], json!("2030-04-01"));
        assert_eq!(value["status"], json!("Pending"));
    }

    #[rstest]
    fn document_restores_booking() {
        let original = booking();
        let value = serde_json::to_value(BookingDocument::from(&original)).expect("serialise");
        let document: BookingDocument = serde_json::from_value(value).expect("deserialise");
        assert_eq!(Booking::from(document), original);
    }
}
