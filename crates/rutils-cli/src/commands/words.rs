//! Implementation of the `rutils words` command.

use clap::Args;
use miette::Result;
use rutils::{in_words, Gender};
use serde::Serialize;
use tracing::debug;

use crate::output::{print_json, RutilsDiagnostic};

/// Arguments for the words command.
#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Number to spell; fractions are read as "целых ... десятых"
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Gender of the counted noun for whole numbers (masc, fem, neut)
    #[arg(long, short, default_value_t = Gender::Masculine)]
    pub gender: Gender,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct WordsJson {
    amount: f64,
    gender: Gender,
    words: String,
}

/// Run the words command.
pub fn run_words(args: WordsArgs) -> Result<i32> {
    debug!(amount = args.amount, gender = %args.gender, "spelling number");
    let words = in_words(args.amount, args.gender).map_err(|err| {
        RutilsDiagnostic::from(err).with_help("only non-negative finite numbers can be spelled")
    })?;

    if args.json {
        print_json(&WordsJson {
            amount: args.amount,
            gender: args.gender,
            words,
        })?;
    } else {
        println!("{words}");
    }
    Ok(exitcode::OK)
}
