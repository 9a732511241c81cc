//! Error types for the octoechos-calendar crate.

use crate::date::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the octoechos-calendar crate.
///
/// The conversions themselves are total; errors only arise when a value
/// enters the crate from outside (a raw year, a raw date, a raw tone).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies outside the supported range.
    #[error("year out of range: {year} (must be {}..={})", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a (year, month, day) triple is not a real Gregorian date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when a tone number is outside 1..=8.
    #[error("invalid tone: {tone} (must be 1..=8)")]
    InvalidTone {
        /// The tone number that was provided.
        tone: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 200_000 };
        assert_eq!(
            err.to_string(),
            "year out of range: 200000 (must be -100000..=100000)"
        );
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2023-02-29");
    }

    #[test]
    fn error_invalid_tone() {
        let err = CalendarError::InvalidTone { tone: 9 };
        assert_eq!(err.to_string(), "invalid tone: 9 (must be 1..=8)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
