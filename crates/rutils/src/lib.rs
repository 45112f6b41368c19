//! Russian numerals and relative time phrases without locale support.
//!
//! - [`numeral`]: plural agreement ([`choose_plural`]) and spelling numbers,
//!   fractions and money amounts in words.
//! - [`dt`]: "3 часа назад" / "через 2 дня" phrases, ages and dates with
//!   Russian month and weekday names.
//!
//! ```
//! use rutils::{Gender, numeral};
//!
//! assert_eq!(numeral::spell_integer(21, Gender::Feminine), "двадцать одна");
//! assert_eq!(
//!     numeral::choose_plural(21, &["яблоко", "яблока", "яблок"]).unwrap(),
//!     "яблоко"
//! );
//! ```

pub mod dt;
mod error;
pub mod numeral;
pub mod types;

pub use dt::{
    CalendarInterval, DateFormat, DistanceField, DistanceOptions, DistanceTable, age, age_at,
    distance_from_now, distance_of_time_in_words, format_date, parse_instant,
};
pub use error::RutilsError;
pub use numeral::{
    choose_plural, get_plural, in_words, rubles, spell_currency, spell_decimal, spell_integer,
    sum_string,
};
pub use types::{Accuracy, Currency, Gender, Noun, PluralCategory};
