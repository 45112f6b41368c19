//! Plural agreement and in-words spelling of numbers.
//!
//! [`choose_plural`] is the agreement rule every other phrase builder in the
//! crate goes through. The spelling functions decompose a number into
//! base-1000 groups and agree each group's noun (тысяча, миллион, ...) with
//! the group's last digits.

mod plural;
mod tables;
mod words;

pub use plural::{choose_plural, format_number, get_plural, plural_category};
pub use words::{
    in_words, rubles, spell_currency, spell_decimal, spell_integer, sum_string,
};
