use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Julian church calendar in Church Slavonic.
#[derive(Parser)]
#[command(
    name = "octoechos",
    version,
    about = "Julian calendar date, Paschalion and Octoechos tone"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the Julian date line (weekday, month, day numeral, tone).
    Today(TodayArgs),
    /// Print the date of Pascha for one or more years.
    Pascha(PaschaArgs),
    /// Print the Octoechos tone and its Paschal anchor.
    Tone(ToneArgs),
    /// Print the Church Slavonic numeral for a day of the month.
    Numeral(NumeralArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Gregorian date (YYYY-MM-DD) to use instead of the system clock.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `pascha` subcommand.
#[derive(clap::Args)]
pub struct PaschaArgs {
    /// First year to compute.
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i32,

    /// Number of consecutive years to list.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
}

/// Arguments for the `tone` subcommand.
#[derive(clap::Args)]
pub struct ToneArgs {
    /// Gregorian date (YYYY-MM-DD) to use instead of the system clock.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `numeral` subcommand.
#[derive(clap::Args)]
pub struct NumeralArgs {
    /// Day of the month (1..=31).
    pub day: u32,
}
