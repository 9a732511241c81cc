//! Church Slavonic (Cyrillic) numerals for day numbers.

/// Combining titlo (U+0483), the mark that turns letters into a number.
pub const TITLO: char = '\u{483}';

/// Unit glyphs 1..=9, each carrying a titlo. Index 0 is unused.
pub const UNITS: [&str; 10] = [
    "",
    "а\u{483}",
    "в\u{483}",
    "г\u{483}",
    "д\u{483}",
    "є\u{483}",
    "ѕ\u{483}",
    "з\u{483}",
    "и\u{483}",
    "ѳ\u{483}",
];

/// Tens glyphs 10..=90, each carrying a titlo. Index 0 is unused.
pub const TENS: [&str; 10] = [
    "",
    "і\u{483}",
    "к\u{483}",
    "л\u{483}",
    "м\u{483}",
    "н\u{483}",
    "ѯ\u{483}",
    "ѻ\u{483}",
    "п\u{483}",
    "ч\u{483}",
];

/// The bare letter for ten, written after the unit in 11..=19.
pub const TEN_LETTER: &str = "і";

fn bare(glyph: &str) -> &str {
    glyph.trim_end_matches(TITLO)
}

/// Renders a day of the month (1..=31) as a Church Slavonic numeral.
///
/// - 1..=9 and 10 come straight from the tables.
/// - 11..=19 are written unit first, titlo over the unit, then a bare `і`.
/// - 20 and 30 come straight from the tables.
/// - 21..=29 and 31 are written tens then units with both titlos removed
///   and one titlo appended to the whole numeral.
///
/// Returns an empty string for any other value.
///
/// # Example
///
/// ```
/// use octoechos_slavonic::day_to_numeral;
///
/// assert_eq!(day_to_numeral(1), "а\u{483}");
/// assert_eq!(day_to_numeral(11), "а\u{483}і");
/// assert_eq!(day_to_numeral(21), "ка\u{483}");
/// assert_eq!(day_to_numeral(32), "");
/// ```
pub fn day_to_numeral(day: u32) -> String {
    let day = day as usize;
    match day {
        1..=9 => UNITS[day].to_string(),
        10 => TENS[1].to_string(),
        11..=19 => format!("{}{TEN_LETTER}", UNITS[day - 10]),
        20..=31 => {
            let (tens, units) = (day / 10, day % 10);
            if units == 0 {
                return TENS[tens].to_string();
            }
            format!("{}{}{TITLO}", bare(TENS[tens]), bare(UNITS[units]))
        }
        _ => String::new(),
    }
}
