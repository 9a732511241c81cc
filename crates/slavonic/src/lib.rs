//! # octoechos-slavonic
//!
//! Church Slavonic rendering of calendar quantities: day numerals with
//! titlo, genitive month names, weekday names and tone labels.
//!
//! Every function is a lookup or a small composition over static tables.
//! Out-of-range input yields an empty string (numerals, tone labels) or
//! `None` (names) instead of an error.
//!
//! ```ignore
//! use octoechos_slavonic::{day_of_week_name, day_to_numeral, month_name, tone_label};
//!
//! let line = format!(
//!     "{}, {} {}",
//!     day_of_week_name(0).unwrap(), // Sunday
//!     month_name(3).unwrap(),       // April (genitive)
//!     day_to_numeral(22),
//! );
//! let tone = tone_label(3);
//! ```

mod names;
mod numeral;
mod tone;

pub use names::{MONTH_NAMES, WEEKDAY_NAMES, day_of_week_name, month_name};
pub use numeral::{TEN_LETTER, TENS, TITLO, UNITS, day_to_numeral};
pub use tone::{NBSP, TONE_LABEL, tone_label};
