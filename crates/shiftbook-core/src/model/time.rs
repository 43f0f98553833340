//! Timestamp handling for the scheduling API's JSON bodies.
//!
//! The service emits both RFC 3339 strings ("2024-01-01T09:00:00Z") and
//! zone-less forms with or without seconds ("2024-01-01T09:00"). Values are
//! held in UTC and written back as RFC 3339. The module doubles as a serde
//! `with` module for the shift timestamps.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{CoreError, CoreResult};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// ## Summary
/// Parses a timestamp in any of the forms the service emits. Zone-less
/// values are taken as UTC.
///
/// ## Errors
/// Returns a parse error if the string matches none of the accepted forms.
pub fn parse_timestamp(raw: &str) -> CoreResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(CoreError::ParseError(format!("unrecognized timestamp: {raw}")))
}

/// Renders a timestamp the way it is sent back to the service.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Wall-clock portion as "HH:mm", used for shift display labels.
#[must_use]
pub fn clock_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// ## Summary
/// serde `with` serializer: emits RFC 3339 UTC.
///
/// ## Errors
/// Returns an error if the underlying serializer fails.
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

/// ## Summary
/// serde `with` deserializer: accepts every form `parse_timestamp` accepts.
///
/// ## Errors
/// Returns an error if the value is not a string or matches no accepted form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_timestamp("2024-01-01T09:00:00Z").expect("valid");
        assert_eq!(parsed.hour(), 9);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-01-01T09:00:00+02:00").expect("valid");
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn test_parse_naive_without_seconds() {
        let parsed = parse_timestamp("2024-01-01T09:00").expect("valid");
        assert_eq!(clock_label(&parsed), "09:00");
    }

    #[test]
    fn test_parse_naive_with_seconds() {
        let parsed = parse_timestamp("2024-03-20T17:30:15").expect("valid");
        assert_eq!(clock_label(&parsed), "17:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("not a timestamp").is_err());
        assert!(parse_timestamp("2024-01-01").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let parsed = parse_timestamp("2024-01-01T09:00").expect("valid");
        let formatted = format_timestamp(&parsed);
        assert_eq!(formatted, "2024-01-01T09:00:00Z");
        assert_eq!(parse_timestamp(&formatted).expect("valid"), parsed);
    }
}
