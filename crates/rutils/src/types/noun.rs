use crate::numeral::plural_category;
use crate::{Gender, PluralCategory, RutilsError};

/// A countable noun: its three plural forms and its grammatical gender.
///
/// # Example
///
/// ```
/// use rutils::{Gender, Noun};
///
/// let minute = Noun::new(["минута", "минуты", "минут"], Gender::Feminine);
/// assert_eq!(minute.agree(1), "минута");
/// assert_eq!(minute.agree(3), "минуты");
/// assert_eq!(minute.agree(11), "минут");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Noun<'a> {
    forms: [&'a str; 3],
    gender: Gender,
}

impl<'a> Noun<'a> {
    /// Create a noun from its (one, few, many) forms.
    pub const fn new(forms: [&'a str; 3], gender: Gender) -> Self {
        Self { forms, gender }
    }

    /// Create a noun from a slice of forms, rejecting slices shorter than
    /// three. Extra forms are ignored.
    pub fn from_forms<S: AsRef<str>>(forms: &'a [S], gender: Gender) -> Result<Self, RutilsError> {
        match forms {
            [one, few, many, ..] => Ok(Self::new(
                [one.as_ref(), few.as_ref(), many.as_ref()],
                gender,
            )),
            _ => Err(RutilsError::invalid(format!(
                "expected 3 plural forms, got {}",
                forms.len()
            ))),
        }
    }

    /// A noun with empty forms, used when a number is spelled on its own.
    pub const fn bare(gender: Gender) -> Self {
        Self::new(["", "", ""], gender)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn forms(&self) -> &[&'a str; 3] {
        &self.forms
    }

    /// The form for a plural category.
    pub fn form(&self, category: PluralCategory) -> &'a str {
        self.forms[category.index()]
    }

    /// The form agreeing with `amount`.
    pub fn agree(&self, amount: u64) -> &'a str {
        self.form(plural_category(amount))
    }
}

/// A monetary unit and its fractional subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency<'a> {
    pub whole: Noun<'a>,
    pub fractional: Noun<'a>,
}

impl Currency<'static> {
    pub const RUBLE: Self = Currency::new(
        Noun::new(["рубль", "рубля", "рублей"], Gender::Masculine),
        Noun::new(["копейка", "копейки", "копеек"], Gender::Feminine),
    );

    pub const DOLLAR: Self = Currency::new(
        Noun::new(["доллар", "доллара", "долларов"], Gender::Masculine),
        Noun::new(["цент", "цента", "центов"], Gender::Masculine),
    );

    pub const EURO: Self = Currency::new(
        Noun::new(["евро", "евро", "евро"], Gender::Masculine),
        Noun::new(["цент", "цента", "центов"], Gender::Masculine),
    );
}

impl<'a> Currency<'a> {
    pub const fn new(whole: Noun<'a>, fractional: Noun<'a>) -> Self {
        Self { whole, fractional }
    }
}
