//! Tone command: the Octoechos tone with its Paschal anchor.

use anyhow::Result;
use octoechos_calendar::{GregorianDate, paschal_cycle};
use tracing::info_span;

use crate::cli::ToneArgs;
use crate::clock::resolve_date;
use crate::display::format_tone;

/// Print the tone (or Bright Week) and the dates it is counted from.
pub fn run(args: ToneArgs) -> Result<()> {
    let _cmd = info_span!("tone").entered();
    let today = resolve_date(args.date)?;
    for line in tone_report(today) {
        println!("{line}");
    }
    Ok(())
}

fn tone_report(today: GregorianDate) -> Vec<String> {
    let cycle = paschal_cycle(today);
    let tone = match cycle.tone() {
        Some(t) => format!("tone {} ({})", t.get(), format_tone(t)),
        None => "Bright Week (no tone)".to_string(),
    };
    vec![
        format!("date:          {today} = {}", cycle.today),
        format!("pascha:        {} = {}", cycle.pascha.to_gregorian(), cycle.pascha),
        format!(
            "thomas sunday: {} = {}",
            cycle.thomas_sunday.to_gregorian(),
            cycle.thomas_sunday
        ),
        format!("days since:    {}", cycle.days_since_thomas()),
        tone,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_outside_bright_week() {
        let report = tone_report(GregorianDate::new(2024, 5, 26).unwrap());
        assert_eq!(report[0], "date:          2024-05-26 = 2024-05-13 (O.S.)");
        assert_eq!(report[1], "pascha:        2024-05-05 = 2024-04-22 (O.S.)");
        assert_eq!(report[3], "days since:    14");
        assert!(report[4].starts_with("tone 3 ("));
    }

    #[test]
    fn report_in_bright_week() {
        let report = tone_report(GregorianDate::new(2025, 4, 20).unwrap());
        assert_eq!(report[4], "Bright Week (no tone)");
    }
}
