//! Pricing engine for booking totals.
//!
//! A stay is priced per calendar night: any fraction of a day beyond whole
//! days counts as a full additional night (ceiling, not rounding).

use chrono::{DateTime, Utc};

use crate::errors::{DomainError, DomainResult};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Number of nights between two instants, rounded up to whole nights.
/// Callers must ensure `check_out > check_in`; the result is then >= 1.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Computes the total amount for a booking window.
///
/// total = nightly_price x rooms x nights, where nights is the calendar-day
/// ceiling of the window. Strictly monotonic in both the room count and the
/// night count.
pub fn compute_total(
    nightly_price: f64,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    rooms: u32,
) -> DomainResult<f64> {
    if !(nightly_price > 0.0) {
        return Err(DomainError::validation("Nightly price must be positive"));
    }
    if rooms == 0 {
        return Err(DomainError::validation(
            "Number of rooms must be a positive integer",
        ));
    }
    if check_out <= check_in {
        return Err(DomainError::validation(
            "Check-out date must be after check-in date",
        ));
    }

    let nights = nights_between(check_in, check_out);
    Ok(nightly_price * rooms as f64 * nights as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn two_nights_two_rooms() {
        let total = compute_total(2000.0, date(2024, 1, 1), date(2024, 1, 3), 2).unwrap();
        assert_eq!(total, 8000.0);
    }

    #[test]
    fn extending_the_stay_by_one_night() {
        let total = compute_total(2000.0, date(2024, 1, 1), date(2024, 1, 4), 2).unwrap();
        assert_eq!(total, 12000.0);
    }

    #[test]
    fn fractional_days_count_as_a_full_night() {
        let check_in = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 1, 3, 18, 0, 0).unwrap();
        // 2 days and 6 hours rounds up to 3 nights
        assert_eq!(nights_between(check_in, check_out), 3);
        let total = compute_total(100.0, check_in, check_out, 1).unwrap();
        assert_eq!(total, 300.0);
    }

    #[test]
    fn monotonic_in_rooms_and_nights() {
        let base = compute_total(500.0, date(2024, 3, 1), date(2024, 3, 4), 1).unwrap();
        let more_rooms = compute_total(500.0, date(2024, 3, 1), date(2024, 3, 4), 2).unwrap();
        let more_nights = compute_total(500.0, date(2024, 3, 1), date(2024, 3, 5), 1).unwrap();

        assert!(more_rooms > base);
        assert!(more_nights > base);
    }

    #[test]
    fn equal_and_inverted_dates_are_both_rejected() {
        let day = date(2024, 1, 1);
        assert!(compute_total(100.0, day, day, 1).is_err());
        assert!(compute_total(100.0, date(2024, 1, 3), date(2024, 1, 1), 1).is_err());
    }

    #[test]
    fn zero_rooms_and_nonpositive_price_are_rejected() {
        assert!(compute_total(100.0, date(2024, 1, 1), date(2024, 1, 2), 0).is_err());
        assert!(compute_total(0.0, date(2024, 1, 1), date(2024, 1, 2), 1).is_err());
        assert!(compute_total(-5.0, date(2024, 1, 1), date(2024, 1, 2), 1).is_err());
    }
}
