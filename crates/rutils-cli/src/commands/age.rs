//! Implementation of the `rutils age` command.

use chrono::{DateTime, FixedOffset, Utc};
use clap::Args;
use miette::Result;
use rutils::{age_at, get_plural, parse_instant};
use serde::Serialize;

use crate::output::{print_json, RutilsDiagnostic};

const YEAR_FORMS: [&str; 3] = ["год", "года", "лет"];

/// Arguments for the age command.
#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Date of birth
    #[arg(value_parser = parse_instant)]
    pub birth: DateTime<FixedOffset>,

    /// Pretend the current time is this instant
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<FixedOffset>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AgeJson {
    years: u32,
    phrase: String,
}

/// Run the age command.
pub fn run_age(args: AgeArgs) -> Result<i32> {
    let now = args
        .now
        .unwrap_or_else(|| Utc::now().with_timezone(&args.birth.timezone()));
    let years = age_at(&args.birth, &now).map_err(|err| {
        RutilsDiagnostic::from(err).with_help(format!("the current time is {}", now.to_rfc3339()))
    })?;
    let phrase = get_plural(u64::from(years), &YEAR_FORMS, None).map_err(RutilsDiagnostic::from)?;

    if args.json {
        print_json(&AgeJson { years, phrase })?;
    } else {
        println!("{phrase}");
    }
    Ok(exitcode::OK)
}
