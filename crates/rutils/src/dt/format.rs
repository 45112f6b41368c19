//! Date formatting with Russian month and weekday names.

use std::fmt::{Display, Write};
use std::iter::from_fn;

use bon::Builder;
use chrono::{DateTime, Datelike, Local, TimeZone, Weekday};

use crate::RutilsError;
use crate::dt::tables::{DAY_NAMES, MONTH_NAMES};

const DEFAULT_FORMAT: &str = "%d.%m.%Y";

/// A strftime pattern plus the inflection choices for Russian names.
///
/// `%a`, `%A`, `%b`/`%h` and `%B` are rendered with Russian names; every
/// other specifier is left to `chrono`. When the pattern names the month,
/// `%d` drops its zero padding, giving "1 апреля 2007" but "01.04.2007".
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rutils::DateFormat;
///
/// let date = Utc.with_ymd_and_hms(2007, 4, 4, 10, 0, 0).unwrap();
/// let format = DateFormat::builder()
///     .format("%A, %d %B %Y")
///     .month_inflected(true)
///     .preposition(true)
///     .build();
/// assert_eq!(format.render(&date).unwrap(), "в\u{a0}среду, 4 апреля 2007");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct DateFormat {
    /// `chrono` strftime pattern.
    #[builder(default = DEFAULT_FORMAT.to_string())]
    format: String,

    /// Use genitive month names (января instead of январь).
    #[builder(default)]
    month_inflected: bool,

    /// Use accusative weekday names (среду instead of среда).
    #[builder(default)]
    day_inflected: bool,

    /// Put "в"/"во" before weekday names. Implies `day_inflected`.
    #[builder(default)]
    preposition: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::builder().build()
    }
}

impl DateFormat {
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Render `date` on its own wall clock.
    ///
    /// Fails with [`RutilsError::InvalidInput`] when the pattern contains a
    /// specifier `chrono` does not understand.
    pub fn render<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<String, RutilsError>
    where
        Tz::Offset: Display,
    {
        let pattern = self.localize(date.weekday(), date.month0());
        let mut rendered = String::new();
        write!(rendered, "{}", date.format(&pattern)).map_err(|_| {
            RutilsError::invalid(format!("invalid date format '{}'", self.format))
        })?;
        Ok(rendered)
    }

    /// Render the current local time.
    pub fn render_now(&self) -> Result<String, RutilsError> {
        self.render(&Local::now())
    }

    /// Replace the name specifiers of the pattern with literal Russian words.
    fn localize(&self, weekday: Weekday, month0: u32) -> String {
        let day = &DAY_NAMES[weekday.num_days_from_monday() as usize];
        let month = &MONTH_NAMES[month0 as usize];

        let preposition = if self.preposition { day.preposition } else { "" };
        let day_name = if self.day_inflected || self.preposition {
            day.accusative
        } else {
            day.full
        };
        let month_name = if self.month_inflected {
            month[2]
        } else {
            month[1]
        };
        let names_month = specifiers(&self.format).any(|spec| matches!(spec, 'b' | 'B' | 'h'));

        let mut result = String::with_capacity(self.format.len() + 16);
        let mut chars = self.format.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                result.push(ch);
                continue;
            }
            match chars.next() {
                Some('a') => {
                    result.push_str(preposition);
                    result.push_str(day.short);
                }
                Some('A') => {
                    result.push_str(preposition);
                    result.push_str(day_name);
                }
                Some('b' | 'h') => result.push_str(month[0]),
                Some('B') => result.push_str(month_name),
                Some('d') if names_month => result.push_str("%-d"),
                Some(other) => {
                    result.push('%');
                    result.push(other);
                }
                None => result.push('%'),
            }
        }
        result
    }
}

/// Format `date` with Russian names. See [`DateFormat`].
pub fn format_date<Tz: TimeZone>(
    date: &DateTime<Tz>,
    format: &DateFormat,
) -> Result<String, RutilsError>
where
    Tz::Offset: Display,
{
    format.render(date)
}

/// Characters following each `%` in a pattern, skipping `%%`.
fn specifiers(pattern: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = pattern.chars();
    from_fn(move || {
        while let Some(ch) = chars.next() {
            if ch == '%' {
                let next = chars.next();
                if next != Some('%') {
                    return next;
                }
            }
        }
        None
    })
}
