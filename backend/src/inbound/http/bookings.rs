//! Booking HTTP handlers.
//!
//! ```text
//! POST /api/bookings
//! GET  /api/bookings/{id}
//! GET  /api/bookings[?pageNumber=&pageSize=]
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, NaiveDate, Utc};
use pagination::Paged;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{CreateBookingRequest, GetBookingRequest, ListBookingsPageRequest};
use crate::domain::{Booking, BookingDraft, BookingStatus, BookingSummary, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookingStatusSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_booking_id, parse_integer_param};

/// Request payload for creating a booking.
///
/// Absent fields take empty or zero values so the field rules report them as
/// missing instead of the body being rejected wholesale.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequestBody {
    #[schema(example = "Ada Lovelace", max_length = 100)]
    pub guest_name: String,
    #[schema(example = "ada@example.com", format = "email")]
    pub guest_email: String,
    #[schema(example = "+44 20 7946 0000")]
    pub guest_phone: String,
    #[schema(example = "R-101")]
    pub room_id: String,
    #[schema(value_type = String, format = Date, example = "2030-01-01")]
    pub check_in_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2030-01-03")]
    pub check_out_date: NaiveDate,
    #[schema(example = 2, minimum = 1, maximum = 10)]
    pub number_of_guests: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 250.0)]
    pub total_amount: Decimal,
    #[schema(max_length = 500)]
    pub notes: Option<String>,
}

impl From<CreateBookingRequestBody> for BookingDraft {
    fn from(body: CreateBookingRequestBody) -> Self {
        Self {
            guest_name: body.guest_name,
            guest_email: body.guest_email,
            guest_phone: body.guest_phone,
            room_id: body.room_id,
            check_in_date: body.check_in_date,
            check_out_date: body.check_out_date,
            number_of_guests: body.number_of_guests,
            total_amount: body.total_amount,
            notes: body.notes,
        }
    }
}

/// Response payload for booking creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponseBody {
    pub booking_id: Uuid,
    #[schema(value_type = BookingStatusSchema)]
    pub status: BookingStatus,
    #[schema(example = "Booking created successfully")]
    pub message: String,
}

/// Full booking representation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponseBody {
    pub id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: String,
    #[schema(value_type = String, format = Date)]
    pub check_in_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    #[schema(value_type = BookingStatusSchema)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<Booking> for BookingResponseBody {
    fn from(booking: Booking) -> Self {
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
            notes: booking.notes().map(str::to_owned),
        }
    }
}

/// Booking list entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingListItemBody {
    pub id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: String,
    #[schema(value_type = String, format = Date)]
    pub check_in_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub check_out_date: NaiveDate,
    #[schema(value_type = BookingStatusSchema)]
    pub status: BookingStatus,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
}

impl From<BookingSummary> for BookingListItemBody {
    fn from(summary: BookingSummary) -> Self {
        Self {
            id: *summary.id.as_uuid(),
            guest_name: summary.guest_name,
            guest_email: summary.guest_email,
            room_id: summary.room_id,
            check_in_date: summary.check_in_date,
            check_out_date: summary.check_out_date,
            status: summary.status,
            total_amount: summary.total_amount,
        }
    }
}

/// One page of bookings.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingPageBody {
    pub items: Vec<BookingListItemBody>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u32,
    pub total_pages: u64,
}

impl From<Paged<BookingSummary>> for BookingPageBody {
    fn from(page: Paged<BookingSummary>) -> Self {
        let Paged {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
        } = page.map(BookingListItemBody::from);
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
        }
    }
}

/// Listing response: a plain array when no paging parameter is supplied.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BookingListBody {
    /// Every booking, newest first.
    All(Vec<BookingListItemBody>),
    /// One page of bookings, newest first.
    Page(BookingPageBody),
}

/// Query parameters for listing bookings.
///
/// Values are taken as text so non-numeric input is reported per field.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListBookingsQuery {
    /// One-based page number; defaults to 1 when `pageSize` is given.
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page_number: Option<String>,
    /// Page size between 1 and 100; defaults to 5 when `pageNumber` is given.
    #[param(value_type = Option<i64>, minimum = 1, maximum = 100)]
    pub page_size: Option<String>,
}

impl ListBookingsQuery {
    fn is_paged(&self) -> bool {
        self.page_number.is_some() || self.page_size.is_some()
    }

    fn page_request(&self) -> Result<ListBookingsPageRequest, Error> {
        let defaults = ListBookingsPageRequest::default();
        Ok(ListBookingsPageRequest {
            page_number: parse_integer_param(
                self.page_number.as_deref(),
                FieldName::new("pageNumber"),
                defaults.page_number,
            )?,
            page_size: parse_integer_param(
                self.page_size.as_deref(),
                FieldName::new("pageSize"),
                defaults.page_size,
            )?,
        })
    }
}

fn booking_location(id: Uuid) -> String {
    format!("/api/bookings/{id}")
}

/// Create a booking.
///
/// Responds with `201 Created` and a `Location` header pointing at the new
/// booking.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequestBody,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponseBody,
            headers(("Location" = String, description = "URI of the created booking"))),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequestBody>,
) -> ApiResult<HttpResponse> {
    let response = state
        .bookings
        .create_booking(CreateBookingRequest {
            draft: payload.into_inner().into(),
        })
        .await?;

    let id = *response.booking_id.as_uuid();
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, booking_location(id)))
        .json(CreateBookingResponseBody {
            booking_id: id,
            status: response.status,
            message: response.message,
        }))
}

/// Fetch one booking by identifier.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking found", body = BookingResponseBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookingResponseBody>> {
    let booking_id = parse_booking_id(path.as_str(), FieldName::new("id"))?;

    let booking = state
        .bookings_query
        .get_booking(GetBookingRequest { booking_id })
        .await?
        .ok_or_else(|| Error::not_found(format!("Booking with ID {booking_id} not found")))?;

    Ok(web::Json(BookingResponseBody::from(booking)))
}

/// List bookings, newest first.
///
/// Without paging parameters every booking is returned as an array. With
/// `pageNumber` or `pageSize` a page envelope is returned instead.
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "Bookings", body = BookingListBody),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    query: web::Query<ListBookingsQuery>,
) -> ApiResult<web::Json<BookingListBody>> {
    if !query.is_paged() {
        let summaries = state.bookings_query.list_bookings().await?;
        return Ok(web::Json(BookingListBody::All(
            summaries.into_iter().map(BookingListItemBody::from).collect(),
        )));
    }

    let page = state
        .bookings_query
        .list_bookings_page(query.page_request()?)
        .await?;
    Ok(web::Json(BookingListBody::Page(page.into())))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
