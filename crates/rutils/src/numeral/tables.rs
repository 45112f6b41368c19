//! Fixed word tables for spelling numbers.

use crate::{Gender, Noun};

pub(crate) const ZERO: &str = "ноль";

/// Ones by gender column (masculine, feminine, neuter).
pub(crate) const ONES: [[&str; 3]; 10] = [
    ["", "", ""],
    ["один", "одна", "одно"],
    ["два", "две", "два"],
    ["три", "три", "три"],
    ["четыре", "четыре", "четыре"],
    ["пять", "пять", "пять"],
    ["шесть", "шесть", "шесть"],
    ["семь", "семь", "семь"],
    ["восемь", "восемь", "восемь"],
    ["девять", "девять", "девять"],
];

/// 10 through 19.
pub(crate) const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

/// Tens digit 2 through 9; index 1 is covered by [`TEENS`].
pub(crate) const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

pub(crate) const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// Nouns of the magnitude groups above the units group, lowest first.
/// Together they cover the whole `u64` range.
pub(crate) const ORDERS: [Noun<'static>; 6] = [
    Noun::new(["тысяча", "тысячи", "тысяч"], Gender::Feminine),
    Noun::new(["миллион", "миллиона", "миллионов"], Gender::Masculine),
    Noun::new(["миллиард", "миллиарда", "миллиардов"], Gender::Masculine),
    Noun::new(["триллион", "триллиона", "триллионов"], Gender::Masculine),
    Noun::new(
        ["квадриллион", "квадриллиона", "квадриллионов"],
        Gender::Masculine,
    ),
    Noun::new(
        ["квинтиллион", "квинтиллиона", "квинтиллионов"],
        Gender::Masculine,
    ),
];

/// Integer part of a decimal fraction ("одна целая").
pub(crate) const WHOLE: Noun<'static> = Noun::new(["целая", "целых", "целых"], Gender::Feminine);

/// Fraction denominators, indexed by number of decimal digits minus one.
pub(crate) const FRACTIONS: [Noun<'static>; 9] = [
    Noun::new(["десятая", "десятых", "десятых"], Gender::Feminine),
    Noun::new(["сотая", "сотых", "сотых"], Gender::Feminine),
    Noun::new(["тысячная", "тысячных", "тысячных"], Gender::Feminine),
    Noun::new(
        ["десятитысячная", "десятитысячных", "десятитысячных"],
        Gender::Feminine,
    ),
    Noun::new(
        ["стотысячная", "стотысячных", "стотысячных"],
        Gender::Feminine,
    ),
    Noun::new(["миллионная", "миллионных", "миллионных"], Gender::Feminine),
    Noun::new(
        ["десятимиллионная", "десятимиллионных", "десятимиллионных"],
        Gender::Feminine,
    ),
    Noun::new(
        ["стомиллионная", "стомиллионных", "стомиллионных"],
        Gender::Feminine,
    ),
    Noun::new(
        ["миллиардная", "миллиардных", "миллиардных"],
        Gender::Feminine,
    ),
];
