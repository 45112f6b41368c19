//! Implementation of the `rutils distance` command.

use chrono::{DateTime, FixedOffset, Utc};
use clap::Args;
use miette::Result;
use rutils::{parse_instant, Accuracy, CalendarInterval, DistanceOptions};
use serde::Serialize;

use crate::output::{print_json, RutilsDiagnostic};

/// Environment variable holding the default accuracy.
const ACCURACY_ENV: &str = "RUTILS_ACCURACY";

/// Arguments for the distance command.
#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Instant to describe (RFC 3339, "YYYY-MM-DD HH:MM" or a Unix timestamp)
    #[arg(value_parser = parse_instant)]
    pub target: DateTime<FixedOffset>,

    /// Compare with this instant instead of the current time
    #[arg(long, value_parser = parse_instant, conflicts_with = "now")]
    pub reference: Option<DateTime<FixedOffset>>,

    /// Pretend the current time is this instant
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<FixedOffset>>,

    /// Finest unit to mention: year, month, day, hour or minute
    #[arg(long, short, env = ACCURACY_ENV, default_value_t = Accuracy::Year)]
    pub accuracy: Accuracy,

    /// Word before future phrases
    #[arg(long)]
    pub prefix_in: Option<String>,

    /// Word after past phrases
    #[arg(long)]
    pub suffix_ago: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DistanceJson {
    target: DateTime<FixedOffset>,
    reference: DateTime<FixedOffset>,
    relative: bool,
    accuracy: Accuracy,
    interval: CalendarInterval,
    phrase: String,
}

/// Run the distance command.
pub fn run_distance(args: DistanceArgs) -> Result<i32> {
    let options = DistanceOptions::builder()
        .accuracy(args.accuracy)
        .maybe_prefix_in(args.prefix_in)
        .maybe_suffix_ago(args.suffix_ago)
        .build();

    let target = args.target;
    let (reference, relative) = match (args.reference, args.now) {
        (Some(reference), _) => (reference, false),
        (None, Some(now)) => (now, true),
        (None, None) => (Utc::now().with_timezone(&target.timezone()), true),
    };

    let phrase = if relative {
        options.phrase_from_now(&target, &reference)
    } else {
        options.phrase(&target, Some(&reference))
    }
    .map_err(RutilsDiagnostic::from)?;

    if args.json {
        let interval =
            CalendarInterval::between(&target, &reference).map_err(RutilsDiagnostic::from)?;
        print_json(&DistanceJson {
            target,
            reference,
            relative,
            accuracy: args.accuracy,
            interval,
            phrase,
        })?;
    } else {
        println!("{phrase}");
    }
    Ok(exitcode::OK)
}
