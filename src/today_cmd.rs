//! Today command: the Julian date line.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::TodayArgs;
use crate::clock::resolve_date;
use crate::config;
use crate::display::format_date_line;

/// Print the date line for the requested (or current) day.
pub fn run(args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let config = config::load(args.config.as_deref())?;
    let today = resolve_date(args.date)?;
    info!(%today, julian = %today.to_julian(), "formatting date line");
    println!("{}", format_date_line(today, &config.display));
    Ok(())
}
