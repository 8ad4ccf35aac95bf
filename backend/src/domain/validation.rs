//! Declarative field rules and the error map they produce.
//!
//! A rule pairs a wire field name with a predicate and the message reported
//! when the predicate fails. [`evaluate`] runs every rule and keeps going after
//! a failure, so callers always see the complete set of violated fields.

use std::collections::BTreeMap;
use std::fmt;

/// Field name to failure messages, in rule order per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Record a failure message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Whether no rule failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether at least one rule failed for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for `field`, empty when it passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Unwrap into the underlying ordered map.
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// One declarative rule over a subject `T` evaluated with context `C`.
pub struct FieldRule<T, C> {
    /// Wire name of the field the rule guards.
    pub field: &'static str,
    /// Message reported when `holds` returns `false`.
    pub message: &'static str,
    /// Predicate that must hold for valid input.
    pub holds: fn(&T, &C) -> bool,
}

/// Run every rule against `subject`, collecting all failures.
///
/// # Examples
/// ```
/// use hotel_booking::domain::validation::{FieldRule, evaluate};
///
/// const RULES: &[FieldRule<i32, ()>] = &[
///     FieldRule { field: "count", message: "must be positive", holds: |n, _| *n > 0 },
///     FieldRule { field: "count", message: "must be even", holds: |n, _| n % 2 == 0 },
/// ];
///
/// let failures = evaluate(RULES, &-1, &());
/// assert_eq!(failures.messages("count").len(), 2);
/// ```
pub fn evaluate<T, C>(rules: &[FieldRule<T, C>], subject: &T, context: &C) -> ValidationErrors {
    let mut failures = ValidationErrors::default();
    for rule in rules {
        if !(rule.holds)(subject, context) {
            failures.add(rule.field, rule.message);
        }
    }
    failures
}
