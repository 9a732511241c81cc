//! # octoechos-calendar
//!
//! Pure day-granularity arithmetic for the Julian church calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|".to_julian()"| B["JulianDate"]
//!     B -->|".to_gregorian()"| A
//!     C["year"] -->|"julian_offset()"| D["offset (days)"]
//!     C -->|"pascha()"| A
//!     C -->|"julian_pascha()"| B
//!     A -->|"paschal_cycle()"| E["PaschalCycle"]
//!     E -->|".tone()"| F["Option of Tone"]
//!     A -->|"tone_for_date()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use octoechos_calendar::{GregorianDate, julian_offset, pascha, tone_for_date};
//!
//! // Offset between the calendars
//! assert_eq!(julian_offset(2024), 13);
//!
//! // Gregorian -> Julian reckoning
//! let today = GregorianDate::new(2024, 1, 20).unwrap();
//! let julian = today.to_julian(); // 2024-01-07 (O.S.)
//!
//! // Paschalion
//! let easter = pascha(2024).unwrap(); // 2024-05-05
//!
//! // Octoechos tone (None during Bright Week)
//! let tone = tone_for_date(easter.add_days(14)); // Some(Tone(3))
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Tagged Gregorian and Julian-reckoning dates |
//! | `offset` | Calendar offset and conversion between reckonings |
//! | `paschalion` | Julian computus |
//! | `tone` | Octoechos tone cycle |
//! | `error` | Error types |

mod date;
mod error;
mod offset;
mod paschalion;
mod tone;

pub use date::{GregorianDate, JulianDate, MAX_YEAR, MIN_YEAR};
pub use error::CalendarError;
pub use offset::julian_offset;
pub use paschalion::{
    EARLIEST_PASCHA, LATEST_PASCHA, julian_pascha, julian_pascha_month_day, pascha,
};
pub use tone::{BRIGHT_WEEK_DAYS, PaschalCycle, TONE_COUNT, Tone, paschal_cycle, tone_for_date};
