//! Shared parsing helpers for inbound HTTP adapters.
//!
//! Path and query values arrive as text so malformed input can be reported
//! against its wire field name in the same shape as domain rule failures.

use serde_json::json;

use crate::domain::{BookingId, Error, ValidationErrors};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: impl Into<String>, value: &str, code: &str) -> Error {
    let mut failures = ValidationErrors::default();
    failures.add(field.as_str(), message);
    Error::validation(failures).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code,
    }))
}

/// Parse a booking identifier path segment.
pub(crate) fn parse_booking_id(value: &str, field: FieldName) -> Result<BookingId, Error> {
    value
        .parse()
        .map_err(|_| field_error(field, "Booking ID must be a valid UUID", value, "invalid_uuid"))
}

/// Parse an optional integer query parameter, falling back to `default`.
pub(crate) fn parse_integer_param(
    value: Option<&str>,
    field: FieldName,
    default: i64,
) -> Result<i64, Error> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            field_error(
                field,
                format!("{} must be a whole number", field.as_str()),
                raw,
                "invalid_integer",
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const PAGE_SIZE: FieldName = FieldName::new("pageSize");

    #[rstest]
    fn parses_booking_id() {
        let id = BookingId::random();
        let parsed = parse_booking_id(&id.to_string(), FieldName::new("id")).expect("valid id");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn malformed_booking_id_is_reported_on_field() {
        let error = parse_booking_id("room-12", FieldName::new("id")).expect_err("invalid id");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert!(error.errors().is_some_and(|errors| errors.contains_key("id")));
        assert_eq!(
            error.details().and_then(|details| details.get("code")),
            Some(&json!("invalid_uuid"))
        );
    }

    #[rstest]
    #[case(None, 5)]
    #[case(Some(""), 5)]
    #[case(Some(" 20 "), 20)]
    #[case(Some("-3"), -3)]
    fn integer_param_uses_default_or_value(#[case] raw: Option<&str>, #[case] expected: i64) {
        assert_eq!(
            parse_integer_param(raw, PAGE_SIZE, 5).expect("parses"),
            expected
        );
    }

    #[rstest]
    fn non_numeric_param_is_reported_on_field() {
        let error = parse_integer_param(Some("ten"), PAGE_SIZE, 5).expect_err("not a number");
        assert!(
            error
                .errors()
                .and_then(|errors| errors.get("pageSize"))
                .is_some_and(|messages| messages == &["pageSize must be a whole number"])
        );
    }
}
