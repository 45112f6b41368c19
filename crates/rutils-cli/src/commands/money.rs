//! Implementation of the `rutils money` command.

use clap::{Args, ValueEnum};
use miette::Result;
use rutils::{spell_currency, Currency};
use serde::Serialize;

use crate::output::{print_json, RutilsDiagnostic};

/// Built-in currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyArg {
    /// Рубли и копейки
    Rub,
    /// Доллары и центы
    Usd,
    /// Евро и центы
    Eur,
}

impl CurrencyArg {
    fn currency(self) -> Currency<'static> {
        match self {
            CurrencyArg::Rub => Currency::RUBLE,
            CurrencyArg::Usd => Currency::DOLLAR,
            CurrencyArg::Eur => Currency::EURO,
        }
    }
}

/// Arguments for the money command.
#[derive(Debug, Args)]
pub struct MoneyArgs {
    /// Amount, rounded to two decimal places
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency to spell the amount in
    #[arg(long, short, value_enum, default_value_t = CurrencyArg::Rub)]
    pub currency: CurrencyArg,

    /// Spell zero fractional units ("ноль копеек")
    #[arg(long)]
    pub always_fraction: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MoneyJson {
    amount: f64,
    currency: CurrencyArg,
    words: String,
}

/// Run the money command.
pub fn run_money(args: MoneyArgs) -> Result<i32> {
    let words = spell_currency(args.amount, &args.currency.currency(), args.always_fraction)
        .map_err(RutilsDiagnostic::from)?;

    if args.json {
        print_json(&MoneyJson {
            amount: args.amount,
            currency: args.currency,
            words,
        })?;
    } else {
        println!("{words}");
    }
    Ok(exitcode::OK)
}
