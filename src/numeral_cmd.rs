//! Numeral command: a day number in Church Slavonic.

use anyhow::{Result, bail};
use octoechos_slavonic::day_to_numeral;

use crate::cli::NumeralArgs;

/// Print the numeral for a day of the month.
pub fn run(args: NumeralArgs) -> Result<()> {
    let numeral = day_to_numeral(args.day);
    if numeral.is_empty() {
        bail!("day {} is outside 1..=31", args.day);
    }
    println!("{numeral}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_day_zero() {
        let err = run(NumeralArgs { day: 0 }).unwrap_err();
        assert_eq!(err.to_string(), "day 0 is outside 1..=31");
    }

    #[test]
    fn accepts_last_day() {
        assert!(run(NumeralArgs { day: 31 }).is_ok());
    }
}
