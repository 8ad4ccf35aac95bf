//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serde shape so the generated document matches
//! what handlers actually emit.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested booking does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The document store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Validation failed")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
    /// Failed field rules keyed by camelCase field name.
    #[schema(example = json!({"guestEmail": ["Invalid email format"]}))]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// OpenAPI schema for [`crate::domain::BookingStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingStatus)]
pub enum BookingStatusSchema {
    /// Created and awaiting confirmation.
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

#[cfg(test)]
mod tests {
    use utoipa::PartialSchema;

    use super::*;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"), "missing traceId");
        assert!(schema_json.contains("errors"), "missing errors map");
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn booking_status_schema_lists_every_status() {
        let schema_json = schema_to_json::<BookingStatusSchema>();
        assert_eq!(BookingStatusSchema::name(), "crate.domain.BookingStatus");
        for status in ["Pending", "Confirmed", "CheckedIn", "CheckedOut", "Cancelled"] {
            assert!(schema_json.contains(status), "missing {status}");
        }
    }
}
