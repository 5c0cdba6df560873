//! Request DTOs.
//!
//! Deserialized request bodies with `validator` derives. Field names use
//! the camelCase wire format the clients send.

pub mod auth;
pub mod booking;
pub mod checkout;
pub mod hotel;
pub mod review;

use chrono::{DateTime, NaiveDate, Utc};
use validator::Validate;

use crate::handlers::ApiError;

/// Runs validator checks, collecting field messages into the error
/// envelope.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate().map_err(|errors| {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        ApiError(se_core::errors::DomainError::validation(format!(
            "Invalid request: {}",
            details.join(", ")
        )))
    })
}

/// Parses a date as RFC 3339 or plain `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(DateTime::from_naive_utc_and_offset(
            date.and_time(chrono::NaiveTime::MIN),
            Utc,
        ));
    }
    Err(ApiError::validation(format!(
        "{field} must be an RFC 3339 timestamp or YYYY-MM-DD date"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_parse_to_midnight_utc() {
        let parsed = parse_date("checkIn", "2026-09-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-09-01T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_timestamps_keep_their_instant() {
        let parsed = parse_date("checkIn", "2026-09-01T15:30:00+05:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-09-01T10:00:00+00:00");
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert!(parse_date("checkIn", "next tuesday").is_err());
    }
}
