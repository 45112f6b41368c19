//! CLI command implementations.

mod age;
mod date;
mod distance;
mod money;
mod plural;
mod words;

pub use age::{run_age, AgeArgs};
pub use date::{run_date, DateArgs};
pub use distance::{run_distance, DistanceArgs};
pub use money::{run_money, CurrencyArg, MoneyArgs};
pub use plural::{run_plural, run_plural_table, PluralArgs, PluralTableArgs};
pub use words::{run_words, WordsArgs};
