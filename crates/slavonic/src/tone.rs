//! Tone labels.

use crate::numeral::UNITS;

/// The word "tone", written before the tone numeral.
pub const TONE_LABEL: &str = "Гла́съ";

/// No-break space (U+00A0) between the label and the numeral.
pub const NBSP: char = '\u{a0}';

/// Renders an Octoechos tone (1..=8) as its label and numeral, e.g.
/// `"Гла́съ\u{a0}г\u{483}"` for tone 3.
///
/// Returns an empty string for any other value.
pub fn tone_label(tone: u8) -> String {
    if !(1..=8).contains(&tone) {
        return String::new();
    }
    format!("{TONE_LABEL}{NBSP}{}", UNITS[usize::from(tone)])
}
