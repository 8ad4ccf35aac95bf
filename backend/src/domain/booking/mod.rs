//! Booking aggregate and its read projections.
//!
//! A [`Booking`] is built from a [`BookingDraft`] that has already passed the
//! field rules in [`validation`]. Storage adapters rebuild bookings through
//! [`Booking::restore`] without re-running those rules, so the rules only
//! guard the creation boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod validation;


pub use validation::{BOOKING_RULES, BookingRuleContext, page_request};

/// Stable booking identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Generate a new random [`BookingId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for BookingId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Lifecycle state of a booking.
///
/// Only [`BookingStatus::Pending`] is ever assigned; the remaining variants
/// exist so stored documents and clients share one vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Created and awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the hotel.
    Confirmed,
    /// Guest has arrived.
    CheckedIn,
    /// Guest has left.
    CheckedOut,
    /// Booking was cancelled.
    Cancelled,
}

impl BookingStatus {
    /// Wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "CheckedIn",
            Self::CheckedOut => "CheckedOut",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guest-supplied booking fields awaiting validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_amount: Decimal,
    pub notes: Option<String>,
}

/// A stored booking.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, Utc};
/// use hotel_booking::domain::{Booking, BookingDraft, BookingId, BookingStatus};
/// use rust_decimal::Decimal;
///
/// let draft = BookingDraft {
///     guest_name: "Ada Lovelace".into(),
///     guest_email: "ada@example.com".into(),
///     guest_phone: "+44 20 7946 0000".into(),
///     room_id: "R-101".into(),
///     check_in_date: NaiveDate::from_ymd_opt(2030, 1, 1).expect("date"),
///     check_out_date: NaiveDate::from_ymd_opt(2030, 1, 3).expect("date"),
///     number_of_guests: 2,
///     total_amount: Decimal::new(25_000, 2),
///     notes: None,
/// };
/// let booking = Booking::pending(BookingId::random(), draft, Utc::now());
/// assert_eq!(booking.status(), BookingStatus::Pending);
/// assert!(booking.updated_at().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    id: BookingId,
    details: BookingDraft,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Start a new booking in [`BookingStatus::Pending`].
    pub fn pending(id: BookingId, details: BookingDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details,
            status: BookingStatus::Pending,
            created_at,
            updated_at: None,
        }
    }

    /// Rebuild a booking read back from storage.
    pub fn restore(
        id: BookingId,
        details: BookingDraft,
        status: BookingStatus,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            details,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Guest-supplied fields exactly as accepted at creation.
    pub fn details(&self) -> &BookingDraft {
        &self.details
    }

    pub fn guest_name(&self) -> &str {
        self.details.guest_name.as_str()
    }

    pub fn guest_email(&self) -> &str {
        self.details.guest_email.as_str()
    }

    pub fn guest_phone(&self) -> &str {
        self.details.guest_phone.as_str()
    }

    pub fn room_id(&self) -> &str {
        self.details.room_id.as_str()
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.details.check_in_date
    }

    pub fn check_out_date(&self) -> NaiveDate {
        self.details.check_out_date
    }

    pub fn number_of_guests(&self) -> i32 {
        self.details.number_of_guests
    }

    pub fn total_amount(&self) -> Decimal {
        self.details.total_amount
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification time; never set while bookings are immutable.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// List projection of a [`Booking`].
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub id: BookingId,
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: Decimal,
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id(),
            guest_name: booking.guest_name().to_owned(),
            guest_email: booking.guest_email().to_owned(),
            room_id: booking.room_id().to_owned(),
            check_in_date: booking.check_in_date(),
            check_out_date: booking.check_out_date(),
            status: booking.status(),
            total_amount: booking.total_amount(),
        }
    }
}

impl From<Booking> for BookingSummary {
    fn from(booking: Booking) -> Self {
        Self::from(&booking)
    }
}
