//! Octoechos tone cycle anchored to Pascha.

use tracing::debug;

use crate::date::{GregorianDate, JulianDate};
use crate::error::CalendarError;
use crate::paschalion::julian_pascha_naive;

/// Days from Pascha to Thomas Sunday.
pub const BRIGHT_WEEK_DAYS: i64 = 7;

/// Number of tones in the Octoechos cycle.
pub const TONE_COUNT: u8 = 8;

/// An Octoechos tone (1..=8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tone(u8);

impl Tone {
    /// Creates a new `Tone`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTone`] if `tone` is not in 1..=8.
    pub fn new(tone: u8) -> Result<Self, CalendarError> {
        if !(1..=TONE_COUNT).contains(&tone) {
            return Err(CalendarError::InvalidTone { tone });
        }
        Ok(Self(tone))
    }

    /// Returns the tone number (1..=8).
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Where a day sits in the Paschal cycle that governs its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaschalCycle {
    /// The day itself, in Julian reckoning.
    pub today: JulianDate,
    /// The most recent Pascha on or before `today`.
    pub pascha: JulianDate,
    /// Pascha plus one week.
    pub thomas_sunday: JulianDate,
}

impl PaschalCycle {
    /// Whether `today` falls in Bright Week (Pascha through the Saturday
    /// before Thomas Sunday).
    pub fn is_bright_week(&self) -> bool {
        self.today >= self.pascha && self.today < self.thomas_sunday
    }

    /// Whole days from Thomas Sunday to `today`; negative in Bright Week.
    pub fn days_since_thomas(&self) -> i64 {
        self.today.days_since(self.thomas_sunday)
    }

    /// Tone for `today`, or `None` during Bright Week.
    pub fn tone(&self) -> Option<Tone> {
        if self.is_bright_week() {
            return None;
        }
        let weeks_since_thomas = self.days_since_thomas().div_euclid(7) + 1;
        let tone = (weeks_since_thomas - 1).rem_euclid(i64::from(TONE_COUNT)) + 1;
        // rem_euclid keeps the value in 1..=8.
        Some(Tone(tone as u8))
    }
}

/// Locates `today` within its Paschal cycle.
///
/// Days before this (Julian) year's Pascha belong to the previous year's
/// cycle.
pub fn paschal_cycle(today: GregorianDate) -> PaschalCycle {
    let julian_today = today.to_julian();
    let year = julian_today.year();
    let mut pascha = julian_pascha_naive(year);
    if julian_today < pascha {
        pascha = julian_pascha_naive(year - 1);
    }
    PaschalCycle {
        today: julian_today,
        pascha,
        thomas_sunday: pascha.add_days(BRIGHT_WEEK_DAYS),
    }
}

/// Returns the Octoechos tone for `today`, or `None` during Bright Week.
///
/// # Example
///
/// ```
/// use octoechos_calendar::{GregorianDate, tone_for_date};
///
/// // Pascha 2024 was May 5; Thomas Sunday opens the cycle on tone 1.
/// let pascha = GregorianDate::new(2024, 5, 5).unwrap();
/// assert_eq!(tone_for_date(pascha), None);
/// assert_eq!(tone_for_date(pascha.add_days(7)).map(|t| t.get()), Some(1));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(today = %today))]
pub fn tone_for_date(today: GregorianDate) -> Option<Tone> {
    let cycle = paschal_cycle(today);
    let tone = cycle.tone();
    debug!(
        pascha = %cycle.pascha,
        days_since_thomas = cycle.days_since_thomas(),
        tone = tone.map(Tone::get),
        "computed tone"
    );
    tone
}
