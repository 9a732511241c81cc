use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use octoechos_calendar::GregorianDate;
use tracing::debug;

/// Resolve the day to work on: the explicit date, or today's local date.
pub fn resolve_date(date: Option<NaiveDate>) -> Result<GregorianDate> {
    let naive = match date {
        Some(d) => d,
        None => {
            let today = Local::now().date_naive();
            debug!(%today, "using system clock");
            today
        }
    };
    GregorianDate::from_naive(naive).with_context(|| format!("unsupported date: {naive}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_date_wins() {
        let naive = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let date = resolve_date(Some(naive)).unwrap();
        assert_eq!(date, GregorianDate::new(2024, 5, 5).unwrap());
    }

    #[test]
    fn system_clock_fallback() {
        assert!(resolve_date(None).is_ok());
    }

    #[test]
    fn out_of_range_year_errors() {
        let naive = NaiveDate::from_ymd_opt(150_000, 1, 1).unwrap();
        let err = resolve_date(Some(naive)).unwrap_err();
        assert!(format!("{err:#}").contains("year out of range"));
    }
}
