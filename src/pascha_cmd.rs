//! Pascha command: the Paschalion for a run of years.

use anyhow::{Context, Result, bail};
use octoechos_calendar::{julian_pascha, pascha};
use tracing::info_span;

use crate::cli::PaschaArgs;

/// Print Gregorian and Julian Pascha for each requested year.
pub fn run(args: PaschaArgs) -> Result<()> {
    let _cmd = info_span!("pascha", year = args.year, count = args.count).entered();
    for row in pascha_rows(args.year, args.count)? {
        println!("{row}");
    }
    Ok(())
}

fn pascha_rows(first_year: i32, count: u32) -> Result<Vec<String>> {
    if count == 0 {
        bail!("count must be at least 1");
    }
    let last_year = i32::try_from(count - 1)
        .ok()
        .and_then(|n| first_year.checked_add(n))
        .with_context(|| format!("{count} years from {first_year} overflows"))?;

    (first_year..=last_year)
        .map(|year| {
            let gregorian = pascha(year).with_context(|| format!("no Pascha for {year}"))?;
            let julian = julian_pascha(year).with_context(|| format!("no Pascha for {year}"))?;
            Ok(format!("{year}\t{gregorian}\t{julian}"))
        })
        .collect()
}
