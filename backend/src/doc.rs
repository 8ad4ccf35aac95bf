//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the booking and health endpoints together with the
//! schema wrappers in [`crate::inbound::http::schemas`], keeping domain types
//! free of utoipa derives. The document is served by Swagger UI in debug
//! builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::bookings::{
    BookingListBody, BookingListItemBody, BookingPageBody, BookingResponseBody,
    CreateBookingRequestBody, CreateBookingResponseBody,
};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{BookingStatusSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel booking API",
        description = "Create, fetch, and list hotel room bookings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateBookingRequestBody,
        CreateBookingResponseBody,
        BookingResponseBody,
        BookingListItemBody,
        BookingPageBody,
        BookingListBody,
        BookingStatusSchema,
        ErrorSchema,
        ErrorCodeSchema,
        HealthStatus
    )),
    tags(
        (name = "bookings", description = "Hotel room bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
