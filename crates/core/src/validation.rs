//! Field-level validation shared by every input DTO.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::types::DbId;

/// Address pattern used for contact and booking emails: something, `@`,
/// something, `.`, something, with no whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Returns `true` when the value is absent or contains only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check that every named field carries a non-blank value.
///
/// The error message lists every missing field in declaration order, e.g.
/// `Missing required fields: vehicleModel, bookingTime`.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Returns `true` if `email` matches the standard address pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate an email address, naming the field in the error.
pub fn validate_email(field: &str, email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid {field} format")))
    }
}

/// Parse a client-supplied id.
///
/// `entity` is used in the error message, e.g. `Invalid Booking ID format`.
pub fn parse_id(entity: &str, raw: Option<&str>) -> Result<DbId, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("{entity} ID is required")))?;
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid {entity} ID format")))
}

/// Trim a text field, treating an absent value as empty.
///
/// Used for required fields after [`require_fields`] has passed and for
/// optional free-text fields that are stored as empty strings.
pub fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Trim an optional update field, treating a blank value as omitted.
///
/// Image fields use this so that an edit form posting an empty string keeps
/// the current image.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_present_passes() {
        assert!(require_fields(&[("name", Some("Asha")), ("email", Some("a@x.com"))]).is_ok());
    }

    #[test]
    fn lists_every_missing_field_in_order() {
        let err = require_fields(&[
            ("name", Some("Asha")),
            ("vehicleModel", None),
            ("bookingDate", Some("   ")),
            ("bookingTime", None),
        ])
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg == "Missing required fields: vehicleModel, bookingDate, bookingTime");
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@garage.co.in"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a x@y.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn validate_email_names_field() {
        let err = validate_email("email", "nope").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Invalid email format");
    }

    #[test]
    fn parse_id_missing() {
        let err = parse_id("Booking", None).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "Booking ID is required");
    }

    #[test]
    fn parse_id_malformed() {
        let err = parse_id("Booking", Some("64f0c2a1e4b0a1b2c3d4e5f6")).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "Invalid Booking ID format");
    }

    #[test]
    fn parse_id_valid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id("Booking", Some(&id.to_string())).unwrap(), id);
    }

    #[test]
    fn non_blank_drops_empty_strings() {
        assert_eq!(non_blank(Some(" ".into())), None);
        assert_eq!(non_blank(Some(" x ".into())).as_deref(), Some("x"));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn trimmed_defaults_to_empty() {
        assert_eq!(trimmed(Some("  Asha ".into())), "Asha");
        assert_eq!(trimmed(None), "");
    }
}
