//! Gregorian and Julian-reckoning dates.
//!
//! Both reckonings share `chrono::NaiveDate` as the underlying day
//! primitive, but they are distinct types: a [`GregorianDate`] can only
//! become a [`JulianDate`] through [`GregorianDate::to_julian`] and back
//! through [`JulianDate::to_gregorian`].

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// Smallest year accepted as input.
pub const MIN_YEAR: i32 = -100_000;

/// Largest year accepted as input.
pub const MAX_YEAR: i32 = 100_000;

/// Rejects years outside `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn check_year(year: i32) -> Result<i32, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(year)
}

/// Shifts a day by a signed number of days.
///
/// Callers derive `date` from an input year in `MIN_YEAR..=MAX_YEAR`,
/// which leaves far more headroom than any offset shift or tone-cycle
/// step needs.
pub(crate) fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    // Safety: the accepted year range sits well inside chrono's range.
    shifted.expect("shift stays within chrono's representable range")
}

/// A day in the (proleptic) Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month (1..=12) and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is unsupported
    /// and [`CalendarError::InvalidDate`] if the triple is not a real date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        check_year(year)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Wraps a host date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is unsupported.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        check_year(date.year())?;
        Ok(Self(date))
    }

    /// Wraps a host date derived inside the crate from an in-range input.
    ///
    /// Derived dates may sit a few years past `MIN_YEAR..=MAX_YEAR` (the
    /// offset grows to hundreds of days far from the present), but always
    /// well inside chrono's range.
    pub(crate) fn from_naive_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying host date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the 0-based month (0..=11).
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week, 0 = Sunday through 6 = Saturday.
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the date `days` days later (or earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self(shift(self.0, days))
    }

    /// Returns the number of whole days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A day expressed in Julian-calendar reckoning.
///
/// Produced by [`GregorianDate::to_julian`] or by the Paschalion. The
/// year, month and day are the Julian ones; the day-of-week of the
/// underlying primitive is meaningless and is not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDate(NaiveDate);

impl JulianDate {
    pub(crate) fn from_naive_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    pub(crate) fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the Julian year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the Julian month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the 0-based Julian month (0..=11).
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    /// Returns the Julian day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` days later (or earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self(shift(self.0, days))
    }

    /// Returns the number of whole days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (O.S.)", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = GregorianDate::new(2024, 5, 5).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 5);
        assert_eq!(date.month0(), 4);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            GregorianDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            GregorianDate::new(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2024,
                month: 13,
                day: 1,
            }
        );
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            GregorianDate::new(MAX_YEAR + 1, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: MAX_YEAR + 1 }
        );
        assert_eq!(
            GregorianDate::new(MIN_YEAR - 1, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: MIN_YEAR - 1 }
        );
    }

    #[test]
    fn from_naive_checks_year() {
        let naive = NaiveDate::from_ymd_opt(150_000, 1, 1).unwrap();
        assert_eq!(
            GregorianDate::from_naive(naive).unwrap_err(),
            CalendarError::YearOutOfRange { year: 150_000 }
        );
    }

    #[test]
    fn weekday_from_sunday() {
        // 2024-05-05 was a Sunday, 2024-05-11 a Saturday.
        assert_eq!(GregorianDate::new(2024, 5, 5).unwrap().weekday_from_sunday(), 0);
        assert_eq!(GregorianDate::new(2024, 5, 11).unwrap().weekday_from_sunday(), 6);
    }

    #[test]
    fn add_days_crosses_year() {
        let date = GregorianDate::new(2024, 12, 30).unwrap();
        assert_eq!(date.add_days(3), GregorianDate::new(2025, 1, 2).unwrap());
        assert_eq!(date.add_days(-30), GregorianDate::new(2024, 11, 30).unwrap());
    }

    #[test]
    fn add_days_leap_day() {
        let date = GregorianDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.add_days(1), GregorianDate::new(2024, 2, 29).unwrap());
        assert_eq!(date.add_days(2), GregorianDate::new(2024, 3, 1).unwrap());
    }

    #[test]
    fn days_since() {
        let a = GregorianDate::new(2024, 5, 5).unwrap();
        let b = GregorianDate::new(2024, 5, 12).unwrap();
        assert_eq!(b.days_since(a), 7);
        assert_eq!(a.days_since(b), -7);
    }

    #[test]
    fn ord_trait() {
        let a = GregorianDate::new(2023, 12, 31).unwrap();
        let b = GregorianDate::new(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn display_formats() {
        let g = GregorianDate::new(2024, 5, 5).unwrap();
        assert_eq!(g.to_string(), "2024-05-05");
        let j = JulianDate::from_naive_unchecked(NaiveDate::from_ymd_opt(2024, 4, 22).unwrap());
        assert_eq!(j.to_string(), "2024-04-22 (O.S.)");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<GregorianDate>();
        assert_copy::<JulianDate>();
    }
}
