//! Domain events recorded alongside booking documents.
//!
//! Events are appended in the same storage transaction as the booking they
//! describe, so a stored event always has a matching document.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingId};

/// Event emitted when a booking is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub booking_id: BookingId,
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl BookingCreated {
    /// Stream type name stored with the event.
    pub const EVENT_TYPE: &'static str = "booking_created";
}

impl From<&Booking> for BookingCreated {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id(),
            guest_name: booking.guest_name().to_owned(),
            guest_email: booking.guest_email().to_owned(),
            room_id: booking.room_id().to_owned(),
            check_in_date: booking.check_in_date(),
            check_out_date: booking.check_out_date(),
            number_of_guests: booking.number_of_guests(),
            total_amount: booking.total_amount(),
            created_at: booking.created_at(),
        }
    }
}
