//! Russian cardinal plural selection.
//!
//! The rule depends only on the last two digits of the amount:
//!
//! | last digits              | form   | example   |
//! |--------------------------|--------|-----------|
//! | ends in 1, except 11     | `one`  | 21 минута |
//! | ends in 2–4, except 12–14| `few`  | 23 минуты |
//! | everything else          | `many` | 11 минут  |

use crate::{PluralCategory, RutilsError};

/// Non-breaking space placed between a number and the noun it counts.
pub(crate) const NBSP: char = '\u{a0}';

/// Thin space separating thousands groups in formatted numbers.
pub(crate) const THIN_SPACE: char = '\u{2009}';

/// Get the plural category for an amount.
///
/// # Examples
///
/// ```
/// use rutils::PluralCategory;
/// use rutils::numeral::plural_category;
///
/// assert_eq!(plural_category(1), PluralCategory::One);
/// assert_eq!(plural_category(22), PluralCategory::Few);
/// assert_eq!(plural_category(12), PluralCategory::Many);
/// ```
pub fn plural_category(amount: u64) -> PluralCategory {
    let mod10 = amount % 10;
    let mod100 = amount % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(11..=19).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Choose the form of a noun agreeing with `amount`.
///
/// `variants` holds the forms for 1, 2 and 5 items in that order.
/// Returns [`RutilsError::InvalidInput`] when fewer than three are given.
///
/// # Examples
///
/// ```
/// use rutils::numeral::choose_plural;
///
/// let forms = ["гвоздь", "гвоздя", "гвоздей"];
/// assert_eq!(choose_plural(21, &forms).unwrap(), "гвоздь");
/// assert_eq!(choose_plural(104, &forms).unwrap(), "гвоздя");
/// assert_eq!(choose_plural(113, &forms).unwrap(), "гвоздей");
/// assert!(choose_plural(1, &["гвоздь"]).is_err());
/// ```
pub fn choose_plural<S: AsRef<str>>(amount: u64, variants: &[S]) -> Result<&str, RutilsError> {
    if variants.len() < 3 {
        return Err(RutilsError::invalid(format!(
            "incorrect variants length {} (must be 3)",
            variants.len()
        )));
    }
    Ok(variants[plural_category(amount).index()].as_ref())
}

/// Render an amount together with its agreeing noun form, e.g. `5 минут`.
///
/// The number and the noun are joined by a non-breaking space. When the
/// amount is zero and `absence` is given, `absence` is returned as is
/// ("нет сообщений" instead of "0 сообщений").
pub fn get_plural<S: AsRef<str>>(
    amount: u64,
    variants: &[S],
    absence: Option<&str>,
) -> Result<String, RutilsError> {
    if let (0, Some(absence)) = (amount, absence) {
        return Ok(absence.to_string());
    }
    let form = choose_plural(amount, variants)?;
    Ok(format!("{}{NBSP}{form}", format_number(amount)))
}

/// Format an integer with thin spaces between thousands groups.
///
/// ```
/// use rutils::numeral::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(1_234_567), "1\u{2009}234\u{2009}567");
/// ```
pub fn format_number(amount: u64) -> String {
    let digits = amount.to_string();
    let mut result = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(THIN_SPACE);
        }
        result.push(ch);
    }
    result
}
