//! Julian-calendar Paschalion (the Alexandrian computus).

use chrono::NaiveDate;
use tracing::debug;

use crate::date::{GregorianDate, JulianDate, check_year, shift};
use crate::error::CalendarError;
use crate::offset::julian_offset;

/// Earliest Julian (month, day) on which Pascha can fall.
pub const EARLIEST_PASCHA: (u8, u8) = (3, 22);

/// Latest Julian (month, day) on which Pascha can fall.
pub const LATEST_PASCHA: (u8, u8) = (4, 25);

/// Returns the Julian-calendar (month, day) of Pascha in `year`.
///
/// `month` is 3 (March) or 4 (April). Remainders are Euclidean, so the
/// result is defined for every integer year.
pub fn julian_pascha_month_day(year: i32) -> (u8, u8) {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let n = d + e + 114;
    // n is in 114..=148, so both narrowings are lossless.
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Gregorian date of Pascha in `year`, without the range check.
///
/// Callers guarantee `year` is within one of `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn pascha_naive(year: i32) -> NaiveDate {
    let (month, day) = julian_pascha_month_day(year);
    // Safety: March 22 ..= April 25 exists in every year chrono represents.
    let julian = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .expect("Pascha always falls in March or April");
    shift(julian, julian_offset(year))
}

/// Julian-reckoning date of Pascha in `year`, without the range check.
pub(crate) fn julian_pascha_naive(year: i32) -> JulianDate {
    let gregorian = pascha_naive(year);
    // Undo the same offset: the Julian date belongs to `year` even when the
    // Gregorian one has drifted into a neighbouring year.
    JulianDate::from_naive_unchecked(shift(gregorian, -julian_offset(year)))
}

/// Returns the date of Pascha in `year`, expressed in the Gregorian calendar.
///
/// `year` is the Julian year of the feast. Far from the present the
/// offset exceeds a few months, and the Gregorian date can fall in a
/// different year.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is unsupported.
///
/// # Example
///
/// ```
/// use octoechos_calendar::{GregorianDate, pascha};
///
/// assert_eq!(pascha(2024).unwrap(), GregorianDate::new(2024, 5, 5).unwrap());
/// assert_eq!(pascha(2025).unwrap(), GregorianDate::new(2025, 4, 20).unwrap());
/// ```
pub fn pascha(year: i32) -> Result<GregorianDate, CalendarError> {
    check_year(year)?;
    let date = GregorianDate::from_naive_unchecked(pascha_naive(year));
    debug!(year, %date, "computed Pascha");
    Ok(date)
}

/// Returns the date of Pascha in `year`, expressed in Julian reckoning.
///
/// This is the form the tone cycle compares against
/// [`GregorianDate::to_julian`] results.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is unsupported.
pub fn julian_pascha(year: i32) -> Result<JulianDate, CalendarError> {
    check_year(year)?;
    Ok(julian_pascha_naive(year))
}
