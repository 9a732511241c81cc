//! Gregorian/Julian day offset and conversion between the two reckonings.

use chrono::Datelike;

use crate::date::{GregorianDate, JulianDate, shift};

/// Number of days the Julian calendar lags the Gregorian calendar in `year`.
///
/// `floor(year / 100) - floor(year / 400) - 2`, floored for negative years
/// as well. The value steps up by one at every century year not divisible
/// by 400 and is constant in between.
///
/// ```
/// use octoechos_calendar::julian_offset;
///
/// assert_eq!(julian_offset(1899), 12);
/// assert_eq!(julian_offset(1900), 13);
/// assert_eq!(julian_offset(2024), 13);
/// assert_eq!(julian_offset(2100), 14);
/// ```
pub fn julian_offset(year: i32) -> i64 {
    let year = i64::from(year);
    year.div_euclid(100) - year.div_euclid(400) - 2
}

impl GregorianDate {
    /// Converts to Julian reckoning by subtracting the offset for this
    /// date's Gregorian year.
    ///
    /// The offset is always taken from the Gregorian year, even when the
    /// shifted date falls back into the previous Julian year.
    pub fn to_julian(self) -> JulianDate {
        let offset = julian_offset(self.year());
        JulianDate::from_naive_unchecked(shift(self.naive(), -offset))
    }
}

impl JulianDate {
    /// Converts back to Gregorian reckoning by adding the offset.
    ///
    /// The offset is first taken from the Julian year. If the result lands
    /// in a Gregorian year with a different offset (the first days of a year
    /// in which the offset steps), the offset of that Gregorian year is used
    /// instead, so `g.to_julian().to_gregorian() == g` holds for every `g`
    /// except the one Gregorian day per step that shares its Julian day
    /// with the last day of the previous year.
    pub fn to_gregorian(self) -> GregorianDate {
        let offset = julian_offset(self.year());
        let mut naive = shift(self.naive(), offset);
        let settled = julian_offset(naive.year());
        if settled != offset {
            naive = shift(self.naive(), settled);
        }
        GregorianDate::from_naive_unchecked(naive)
    }
}
