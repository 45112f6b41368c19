//! Implementation of the `rutils plural` and `rutils plural-table` commands.

use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};
use rutils::numeral::plural_category;
use rutils::{choose_plural, get_plural, PluralCategory, RutilsError};
use serde::Serialize;

use crate::output::table::{format_plural_table, PluralRow};
use crate::output::{print_json, RutilsDiagnostic};

/// Arguments for the plural command.
#[derive(Debug, Args)]
pub struct PluralArgs {
    /// Number the noun agrees with
    pub amount: u64,

    /// Noun forms for one, few and many (e.g. минута минуты минут)
    #[arg(num_args = 3, required = true, value_names = ["ONE", "FEW", "MANY"])]
    pub forms: Vec<String>,

    /// Text printed instead of the phrase when the amount is zero
    #[arg(long)]
    pub absence: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the plural-table command.
#[derive(Debug, Args)]
pub struct PluralTableArgs {
    /// First number of the range
    #[arg(long, default_value_t = 0)]
    pub from: u64,

    /// Last number of the range (inclusive)
    #[arg(long, default_value_t = 25)]
    pub to: u64,

    /// Noun forms for one, few and many
    #[arg(num_args = 3, required = true, value_names = ["ONE", "FEW", "MANY"])]
    pub forms: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one agreed number.
#[derive(Debug, Serialize)]
struct PluralJson<'a> {
    amount: u64,
    category: PluralCategory,
    form: &'a str,
    phrase: String,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> Result<i32> {
    let phrase = get_plural(args.amount, &args.forms, args.absence.as_deref())
        .map_err(RutilsDiagnostic::from)?;

    if args.json {
        let form = choose_plural(args.amount, &args.forms).map_err(RutilsDiagnostic::from)?;
        print_json(&PluralJson {
            amount: args.amount,
            category: plural_category(args.amount),
            form,
            phrase,
        })?;
    } else {
        println!("{phrase}");
    }
    Ok(exitcode::OK)
}

/// Run the plural-table command.
pub fn run_plural_table(args: PluralTableArgs) -> Result<i32> {
    if args.from > args.to {
        return Err(RutilsDiagnostic::invalid_input(format!(
            "empty range {}..={}",
            args.from, args.to
        ))
        .with_help("--from must not be greater than --to")
        .into());
    }

    let rows = (args.from..=args.to)
        .map(|amount| {
            Ok(PluralRow {
                amount,
                category: plural_category(amount),
                form: choose_plural(amount, &args.forms)?.to_string(),
                phrase: get_plural(amount, &args.forms, None)?,
            })
        })
        .collect::<Result<Vec<_>, RutilsError>>()
        .map_err(RutilsDiagnostic::from)?;

    if args.json {
        let json: Vec<PluralJson<'_>> = rows
            .iter()
            .map(|row| PluralJson {
                amount: row.amount,
                category: row.category,
                form: &row.form,
                phrase: row.phrase.clone(),
            })
            .collect();
        print_json(&json)?;
        return Ok(exitcode::OK);
    }

    println!("{}", format_plural_table(&rows));
    let count = |category: PluralCategory| rows.iter().filter(|row| row.category == category).count();
    println!(
        "{} {}, {} {}, {} {}",
        count(PluralCategory::One),
        "one".if_supports_color(Stream::Stdout, |text| text.green()),
        count(PluralCategory::Few),
        "few".if_supports_color(Stream::Stdout, |text| text.yellow()),
        count(PluralCategory::Many),
        "many".if_supports_color(Stream::Stdout, |text| text.cyan()),
    );
    Ok(exitcode::OK)
}
