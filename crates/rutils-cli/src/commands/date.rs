//! Implementation of the `rutils date` command.

use chrono::{DateTime, FixedOffset};
use clap::Args;
use miette::Result;
use rutils::{format_date, parse_instant, DateFormat};

use crate::output::RutilsDiagnostic;

/// Arguments for the date command.
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Instant to format; the current local time when omitted
    #[arg(value_parser = parse_instant)]
    pub instant: Option<DateTime<FixedOffset>>,

    /// strftime pattern; %a %A %b %B use Russian names
    #[arg(long, short, default_value = "%d.%m.%Y")]
    pub format: String,

    /// Genitive month names ("1 апреля")
    #[arg(long)]
    pub month_inflected: bool,

    /// Accusative weekday names ("среду")
    #[arg(long)]
    pub day_inflected: bool,

    /// "в"/"во" before weekday names
    #[arg(long)]
    pub preposition: bool,
}

/// Run the date command.
pub fn run_date(args: DateArgs) -> Result<i32> {
    let format = DateFormat::builder()
        .format(args.format)
        .month_inflected(args.month_inflected)
        .day_inflected(args.day_inflected)
        .preposition(args.preposition)
        .build();

    let rendered = match &args.instant {
        Some(instant) => format_date(instant, &format),
        None => format.render_now(),
    }
    .map_err(|err| {
        RutilsDiagnostic::from(err).with_help("see chrono's strftime documentation")
    })?;

    println!("{rendered}");
    Ok(exitcode::OK)
}
