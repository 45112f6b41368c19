//! Spelling integers, decimal fractions and money amounts in words.

use tracing::trace;

use crate::numeral::tables::{FRACTIONS, HUNDREDS, ONES, ORDERS, TEENS, TENS, WHOLE, ZERO};
use crate::{Currency, Gender, Noun, PluralCategory, RutilsError};

/// Exclusive upper bound of `u64` as a float.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Spell `amount` in words followed by the agreeing form of `noun`.
///
/// The units group is spelled in the noun's gender; thousands are feminine
/// and every higher group is masculine. A zero units group still names the
/// noun ("одна тысяча рублей"), zero higher groups are silent ("один
/// миллион", not "один миллион ноль тысяч").
///
/// # Examples
///
/// ```
/// use rutils::Currency;
/// use rutils::numeral::sum_string;
///
/// assert_eq!(
///     sum_string(2_021, &Currency::RUBLE.whole),
///     "две тысячи двадцать один рубль"
/// );
/// assert_eq!(sum_string(0, &Currency::RUBLE.whole), "ноль рублей");
/// ```
pub fn sum_string(amount: u64, noun: &Noun<'_>) -> String {
    let many = noun.form(PluralCategory::Many);
    if amount == 0 {
        return join_words([ZERO, many]);
    }

    let mut value = amount.div_euclid(1000);
    let units = amount % 1000;
    let mut words = if units == 0 {
        vec![many]
    } else {
        group_words(units, noun)
    };

    for order in &ORDERS {
        if value == 0 {
            break;
        }
        let rest = value % 1000;
        value = value.div_euclid(1000);
        if rest == 0 {
            continue;
        }
        let mut group = group_words(rest, order);
        group.append(&mut words);
        words = group;
    }

    join_words(words)
}

/// Spell a non-negative integer in the given gender.
///
/// ```
/// use rutils::Gender;
/// use rutils::numeral::spell_integer;
///
/// assert_eq!(spell_integer(2, Gender::Feminine), "две");
/// assert_eq!(spell_integer(1_000_000, Gender::Masculine), "один миллион");
/// ```
pub fn spell_integer(amount: u64, gender: Gender) -> String {
    sum_string(amount, &Noun::bare(gender))
}

/// Spell a non-negative decimal fraction, e.g. `2.05` as
/// "две целых пять сотых".
///
/// Up to nine fractional digits are kept. An amount whose fractional part
/// rounds away spells only the integer part ("две целых").
pub fn spell_decimal(amount: f64) -> Result<String, RutilsError> {
    let amount = check_amount(amount)?;
    let (whole, fraction) = split_fraction(amount, FRACTIONS.len())?;
    trace!(amount, whole, fraction = %fraction, "split decimal");

    let mut parts = vec![sum_string(whole, &WHOLE)];
    if let Some(denominator) = fraction
        .len()
        .checked_sub(1)
        .and_then(|index| FRACTIONS.get(index))
    {
        parts.push(sum_string(parse_digits(&fraction)?, denominator));
    }
    Ok(parts.join(" "))
}

/// Spell any non-negative number: integral values through
/// [`spell_integer`], everything else through [`spell_decimal`].
pub fn in_words(amount: f64, gender: Gender) -> Result<String, RutilsError> {
    let amount = check_amount(amount)?;
    if amount.fract() == 0.0 && amount < U64_LIMIT {
        Ok(spell_integer(amount as u64, gender))
    } else {
        spell_decimal(amount)
    }
}

/// Spell a money amount, rounded to two fractional digits.
///
/// The whole-unit phrase is left out when the whole part is zero. The
/// fractional phrase is left out when there are no fractional units, unless
/// `always_show_fractional` is set.
///
/// # Examples
///
/// ```
/// use rutils::Currency;
/// use rutils::numeral::spell_currency;
///
/// assert_eq!(
///     spell_currency(1.05, &Currency::RUBLE, false).unwrap(),
///     "один рубль пять копеек"
/// );
/// assert_eq!(
///     spell_currency(3.0, &Currency::DOLLAR, true).unwrap(),
///     "три доллара ноль центов"
/// );
/// ```
pub fn spell_currency(
    amount: f64,
    currency: &Currency<'_>,
    always_show_fractional: bool,
) -> Result<String, RutilsError> {
    let amount = check_amount(amount)?;
    let (whole, fraction) = split_fraction(round_cents(amount)?, 2)?;

    let mut parts = Vec::new();
    if whole > 0 {
        parts.push(sum_string(whole, &currency.whole));
    }
    if !fraction.is_empty() || always_show_fractional {
        let mut cents = if fraction.is_empty() {
            0
        } else {
            parse_digits(&fraction)?
        };
        // "1.5" means fifty kopecks, not five
        if fraction.len() == 1 {
            cents *= 10;
        }
        parts.push(sum_string(cents, &currency.fractional));
    }
    Ok(parts.join(" "))
}

/// Spell an amount of rubles and kopecks.
pub fn rubles(amount: f64, zero_for_kopeck: bool) -> Result<String, RutilsError> {
    spell_currency(amount, &Currency::RUBLE, zero_for_kopeck)
}

/// Words of one base-1000 group (1..=999) followed by its agreeing noun.
fn group_words<'a>(rest: u64, noun: &Noun<'a>) -> Vec<&'a str> {
    let hundreds = HUNDREDS[rest.div_euclid(100) as usize];
    let tail = rest % 100;
    let tens = tail.div_euclid(10) as usize;
    let ones = tail % 10;

    if tens == 1 {
        vec![
            hundreds,
            TEENS[ones as usize],
            noun.form(PluralCategory::Many),
        ]
    } else {
        vec![
            hundreds,
            TENS[tens],
            ONES[ones as usize][noun.gender().index()],
            noun.agree(ones),
        ]
    }
}

fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn check_amount(amount: f64) -> Result<f64, RutilsError> {
    if !amount.is_finite() {
        return Err(RutilsError::invalid(format!(
            "amount must be a finite number, got {amount}"
        )));
    }
    if amount < 0.0 {
        return Err(RutilsError::invalid(format!(
            "amount must be positive or 0, got {amount}"
        )));
    }
    // folds -0.0 into 0.0
    Ok(amount.abs())
}

/// Render `amount` with `digits` fractional digits and split it into the
/// integer part and the fractional digits with trailing zeros removed.
fn split_fraction(amount: f64, digits: usize) -> Result<(u64, String), RutilsError> {
    let rendered = format!("{amount:.digits$}");
    let (whole, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let whole = whole
        .parse::<u64>()
        .map_err(|_| RutilsError::invalid(format!("amount {amount} is too large")))?;
    Ok((whole, fraction.trim_end_matches('0').to_string()))
}

/// Round to two fractional digits, first trimming the scaled value to 15
/// significant digits so that 1.005 rounds up to 1.01.
fn round_cents(amount: f64) -> Result<f64, RutilsError> {
    let scaled = format!("{:.14e}", amount * 100.0);
    let scaled = scaled
        .parse::<f64>()
        .map_err(|e| RutilsError::internal(format!("rescaling '{scaled}': {e}")))?;
    Ok(scaled.round() / 100.0)
}

fn parse_digits(digits: &str) -> Result<u64, RutilsError> {
    digits
        .parse::<u64>()
        .map_err(|e| RutilsError::internal(format!("fraction digits '{digits}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_words_teens_force_many() {
        let thousand = &ORDERS[0];
        assert_eq!(group_words(11, thousand), vec!["", "одиннадцать", "тысяч"]);
        assert_eq!(
            group_words(512, thousand),
            vec!["пятьсот", "двенадцать", "тысяч"]
        );
    }

    #[test]
    fn group_words_agree_on_ones_digit() {
        let thousand = &ORDERS[0];
        assert_eq!(
            group_words(322, thousand),
            vec!["триста", "двадцать", "две", "тысячи"]
        );
        assert_eq!(group_words(300, thousand), vec!["триста", "", "", "тысяч"]);
    }

    #[test]
    fn split_fraction_strips_trailing_zeros() {
        assert_eq!(split_fraction(2.05, 9).unwrap(), (2, "05".to_string()));
        assert_eq!(split_fraction(3.0, 2).unwrap(), (3, String::new()));
        assert_eq!(split_fraction(0.5, 2).unwrap(), (0, "5".to_string()));
    }

    #[test]
    fn split_fraction_rounding_carries_into_whole() {
        assert_eq!(split_fraction(0.999_999_999_9, 9).unwrap(), (1, String::new()));
    }

    #[test]
    fn round_cents_corrects_binary_representation() {
        assert_eq!(round_cents(1.005).unwrap(), 1.01);
        assert_eq!(round_cents(2.675).unwrap(), 2.68);
        assert_eq!(round_cents(1.004).unwrap(), 1.0);
        assert_eq!(round_cents(0.125).unwrap(), 0.13);
    }

    #[test]
    fn check_amount_rejects_negative_and_nan() {
        assert!(check_amount(-0.5).is_err());
        assert!(check_amount(f64::NAN).is_err());
        assert!(check_amount(f64::INFINITY).is_err());
        assert_eq!(check_amount(-0.0).unwrap().to_string(), "0");
    }
}
