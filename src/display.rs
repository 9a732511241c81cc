//! The Julian date line shown to readers.

use octoechos_calendar::{GregorianDate, Tone, tone_for_date};
use octoechos_slavonic::{day_of_week_name, day_to_numeral, month_name, tone_label};

use crate::config::DisplayToml;

/// Renders `"{weekday}, {month} {day}"` plus `". {tone}"` outside Bright Week.
///
/// Month and day are the Julian ones; the weekday is taken from the
/// Gregorian date, since a day keeps its weekday in both reckonings.
pub fn format_date_line(today: GregorianDate, opts: &DisplayToml) -> String {
    let julian = today.to_julian();
    // Safety: chrono months and weekdays are always in range.
    let month = month_name(julian.month0() as usize).expect("month0 is in 0..=11");
    let numeral = day_to_numeral(julian.day());

    let mut line = String::new();
    if opts.show_weekday {
        let weekday =
            day_of_week_name(today.weekday_from_sunday() as usize).expect("weekday is in 0..=6");
        line.push_str(weekday);
        line.push_str(", ");
    }
    line.push_str(month);
    line.push(' ');
    line.push_str(&numeral);

    if opts.show_tone {
        if let Some(tone) = tone_for_date(today) {
            line.push_str(". ");
            line.push_str(&format_tone(tone));
        }
    }
    line
}

/// Renders a tone as its Slavonic label.
pub fn format_tone(tone: Tone) -> String {
    tone_label(tone.get())
}
