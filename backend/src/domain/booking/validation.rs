//! Field rules guarding booking creation and list queries.
//!
//! Field names are the camelCase wire names so failures can be returned to
//! clients without translation.

use std::sync::OnceLock;

use chrono::NaiveDate;
use pagination::{PageRequest, PageRequestError};
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use super::BookingDraft;
use crate::domain::validation::{FieldRule, ValidationErrors, evaluate};

/// Longest accepted guest name, in characters.
pub const GUEST_NAME_MAX: usize = 100;
/// Longest accepted notes text, in characters.
pub const NOTES_MAX: usize = 500;
/// Smallest accepted party size.
pub const MIN_GUESTS: i32 = 1;
/// Largest accepted party size.
pub const MAX_GUESTS: i32 = 10;

/// Values the booking rules compare against besides the draft itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRuleContext {
    /// Current calendar date in UTC.
    pub today: NaiveDate,
}

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^\+?[\d\s\-\(\)]+$")
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Rules applied to every [`BookingDraft`] before a booking is created.
pub const BOOKING_RULES: &[FieldRule<BookingDraft, BookingRuleContext>] = &[
    FieldRule {
        field: "guestName",
        message: "Guest name is required",
        holds: |draft, _| is_present(&draft.guest_name),
    },
    FieldRule {
        field: "guestName",
        message: "Guest name must not exceed 100 characters",
        holds: |draft, _| draft.guest_name.chars().count() <= GUEST_NAME_MAX,
    },
    FieldRule {
        field: "guestEmail",
        message: "Guest email is required",
        holds: |draft, _| is_present(&draft.guest_email),
    },
    FieldRule {
        field: "guestEmail",
        message: "Invalid email format",
        holds: |draft, _| !is_present(&draft.guest_email) || draft.guest_email.validate_email(),
    },
    FieldRule {
        field: "guestPhone",
        message: "Guest phone is required",
        holds: |draft, _| is_present(&draft.guest_phone),
    },
    FieldRule {
        field: "guestPhone",
        message: "Invalid phone number format",
        holds: |draft, _| phone_regex().is_match(&draft.guest_phone),
    },
    FieldRule {
        field: "roomId",
        message: "Room ID is required",
        holds: |draft, _| is_present(&draft.room_id),
    },
    FieldRule {
        field: "checkInDate",
        message: "Check-in date must be today or in the future",
        holds: |draft, context| draft.check_in_date >= context.today,
    },
    FieldRule {
        field: "checkOutDate",
        message: "Check-out date must be after check-in date",
        holds: |draft, _| draft.check_out_date > draft.check_in_date,
    },
    FieldRule {
        field: "numberOfGuests",
        message: "Number of guests must be at least 1",
        holds: |draft, _| draft.number_of_guests >= MIN_GUESTS,
    },
    FieldRule {
        field: "numberOfGuests",
        message: "Number of guests cannot exceed 10",
        holds: |draft, _| draft.number_of_guests <= MAX_GUESTS,
    },
    FieldRule {
        field: "totalAmount",
        message: "Total amount must be greater than 0",
        holds: |draft, _| draft.total_amount > Decimal::ZERO,
    },
    FieldRule {
        field: "notes",
        message: "Notes must not exceed 500 characters",
        holds: |draft, _| {
            draft
                .notes
                .as_deref()
                .is_none_or(|notes| notes.chars().count() <= NOTES_MAX)
        },
    },
];

impl BookingDraft {
    /// Check the draft against [`BOOKING_RULES`].
    ///
    /// # Errors
    /// Returns every failed rule keyed by wire field name.
    pub fn validate(&self, context: &BookingRuleContext) -> Result<(), ValidationErrors> {
        evaluate(BOOKING_RULES, self, context).into_result()
    }
}

/// Validate raw list-query paging input.
///
/// # Errors
/// Returns every violated bound keyed by `pageNumber` or `pageSize`.
///
/// # Examples
/// ```
/// use hotel_booking::domain::page_request;
///
/// let failures = page_request(0, 0).expect_err("both bounds violated");
/// assert_eq!(failures.messages("pageNumber"), ["Page number must be at least 1"]);
/// assert_eq!(failures.messages("pageSize"), ["Page size must be at least 1"]);
/// ```
pub fn page_request(page_number: i64, page_size: i64) -> Result<PageRequest, ValidationErrors> {
    PageRequest::try_new(page_number, page_size).map_err(|errors| {
        let mut failures = ValidationErrors::default();
        for error in errors {
            let (field, message) = match error {
                PageRequestError::PageNumberTooSmall => {
                    ("pageNumber", "Page number must be at least 1")
                }
                PageRequestError::PageSizeTooSmall => ("pageSize", "Page size must be at least 1"),
                PageRequestError::PageSizeTooLarge => {
                    ("pageSize", "Page size must not exceed 100")
                }
            };
            failures.add(field, message);
        }
        failures
    })
}
