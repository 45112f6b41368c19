//! "N units ago / in N units" phrases.

use bon::Builder;
use chrono::{DateTime, Days, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::dt::interval::CalendarInterval;
use crate::dt::tables::{
    DAY_AFTER_TOMORROW, DAY_BEFORE_YESTERDAY, DAY_FORMS, HOUR_FORMS, LESS_THAN_MINUTE_AGO,
    LESS_THAN_MINUTE_IN, MINUTE_FORMS, MONTH_FORMS, ONE_HOUR, ONE_MINUTE, ONE_MONTH, ONE_YEAR,
    PREFIX_IN, SUFFIX_AGO, TOMORROW, YEAR_FORMS, YESTERDAY,
};
use crate::numeral::get_plural;
use crate::{Accuracy, RutilsError};

/// A calendar component that can appear in a distance phrase, coarsest
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceField {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
}

impl DistanceField {
    pub const ALL: [DistanceField; 5] = [
        DistanceField::Years,
        DistanceField::Months,
        DistanceField::Days,
        DistanceField::Hours,
        DistanceField::Minutes,
    ];

    /// One-letter code: `y`, `m`, `d`, `h`, `i`.
    pub fn code(self) -> char {
        match self {
            DistanceField::Years => 'y',
            DistanceField::Months => 'm',
            DistanceField::Days => 'd',
            DistanceField::Hours => 'h',
            DistanceField::Minutes => 'i',
        }
    }

    /// This field's component of an interval.
    pub fn value(self, interval: &CalendarInterval) -> u32 {
        match self {
            DistanceField::Years => interval.years,
            DistanceField::Months => interval.months,
            DistanceField::Days => interval.days,
            DistanceField::Hours => interval.hours,
            DistanceField::Minutes => interval.minutes,
        }
    }

    fn forms(self) -> &'static [&'static str; 3] {
        match self {
            DistanceField::Years => &YEAR_FORMS,
            DistanceField::Months => &MONTH_FORMS,
            DistanceField::Days => &DAY_FORMS,
            DistanceField::Hours => &HOUR_FORMS,
            DistanceField::Minutes => &MINUTE_FORMS,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Rendered fragments ("2 года", "5 минут") for the non-zero components of
/// an interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    entries: [Option<String>; 5],
}

impl DistanceTable {
    pub fn from_interval(interval: &CalendarInterval) -> Result<Self, RutilsError> {
        let mut entries: [Option<String>; 5] = Default::default();
        for field in DistanceField::ALL {
            let value = field.value(interval);
            if value != 0 {
                entries[field.index()] = Some(get_plural(u64::from(value), field.forms(), None)?);
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, field: DistanceField) -> Option<&str> {
        self.entries[field.index()].as_deref()
    }

    /// Populated fields in order, coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (DistanceField, &str)> {
        DistanceField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|text| (field, text)))
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick the fragments to report at `accuracy`.
    ///
    /// Each accuracy level up to the requested one is a slot holding at most
    /// one fragment. The first slot takes the coarsest populated field
    /// wherever it is. Every later slot `L` is skipped when the last taken
    /// field is already at or below `L`; otherwise it takes the first
    /// populated field after the last taken one, looking no further than
    /// `L`.
    ///
    /// ```
    /// use rutils::{Accuracy, CalendarInterval, DistanceTable};
    ///
    /// let interval = CalendarInterval { years: 2, months: 3, total_days: 821, ..Default::default() };
    /// let table = DistanceTable::from_interval(&interval).unwrap();
    /// assert_eq!(table.select(Accuracy::Year), vec!["2\u{a0}года"]);
    /// assert_eq!(table.select(Accuracy::Month), vec!["2\u{a0}года", "3\u{a0}месяца"]);
    /// ```
    pub fn select(&self, accuracy: Accuracy) -> Vec<&str> {
        let mut words = Vec::new();
        let mut last: Option<usize> = None;

        for level in 0..usize::from(accuracy.level()) {
            if last.is_some_and(|index| index >= level) {
                continue;
            }
            let (start, end) = match last {
                Some(index) => (index + 1, level + 1),
                None => (0, self.entries.len()),
            };
            let found = (start..end)
                .find_map(|index| self.entries[index].as_deref().map(|text| (index, text)));
            if let Some((index, text)) = found {
                words.push(text);
                last = Some(index);
            }
        }

        words
    }
}

/// Settings for distance phrases.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rutils::{Accuracy, DistanceOptions};
///
/// let options = DistanceOptions::builder()
///     .accuracy(Accuracy::Hour)
///     .suffix_ago("тому назад")
///     .build();
///
/// let reference = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
/// let target = Utc.with_ymd_and_hms(2024, 5, 8, 9, 0, 0).unwrap();
/// assert_eq!(
///     options.phrase(&target, Some(&reference)).unwrap(),
///     "2\u{a0}дня, 3\u{a0}часа\u{a0}тому назад"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct DistanceOptions {
    /// Finest unit the phrase may mention.
    #[builder(default)]
    accuracy: Accuracy,

    /// Word placed before future phrases.
    #[builder(default = PREFIX_IN.to_string())]
    prefix_in: String,

    /// Word placed after past phrases.
    #[builder(default = SUFFIX_AGO.to_string())]
    suffix_ago: String,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        DistanceOptions::builder().build()
    }
}

impl DistanceOptions {
    /// Default words with the given accuracy.
    pub fn with_accuracy(accuracy: Accuracy) -> Self {
        DistanceOptions::builder().accuracy(accuracy).build()
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    pub fn prefix_in(&self) -> &str {
        &self.prefix_in
    }

    pub fn suffix_ago(&self) -> &str {
        &self.suffix_ago
    }

    /// Describe the distance from `reference` to `target`.
    ///
    /// Without a reference the current time is used, and the phrase may
    /// collapse into an idiom such as "вчера" or "час назад".
    pub fn phrase<Tz: TimeZone>(
        &self,
        target: &DateTime<Tz>,
        reference: Option<&DateTime<Tz>>,
    ) -> Result<String, RutilsError> {
        match reference {
            Some(reference) => self.render(target, reference, false),
            None => {
                let now = Utc::now().with_timezone(&target.timezone());
                self.render(target, &now, true)
            }
        }
    }

    /// Like [`phrase`](Self::phrase) without a reference, but with `now`
    /// standing in for the current time.
    pub fn phrase_from_now<Tz: TimeZone>(
        &self,
        target: &DateTime<Tz>,
        now: &DateTime<Tz>,
    ) -> Result<String, RutilsError> {
        self.render(target, now, true)
    }

    fn render<Tz: TimeZone>(
        &self,
        target: &DateTime<Tz>,
        reference: &DateTime<Tz>,
        from_current: bool,
    ) -> Result<String, RutilsError> {
        let reference = reference.with_timezone(&target.timezone());
        let interval = CalendarInterval::between(target, &reference)?;
        debug!(?interval, accuracy = %self.accuracy, from_current, "computed interval");

        if interval.is_under_a_minute() {
            let idiom = if interval.inverted {
                LESS_THAN_MINUTE_IN
            } else {
                LESS_THAN_MINUTE_AGO
            };
            return Ok(idiom.to_string());
        }

        let table = DistanceTable::from_interval(&interval)?;
        if table.is_empty() {
            return Err(RutilsError::internal(format!(
                "no distance fields in {interval:?}"
            )));
        }
        let words = table.select(self.accuracy);

        if from_current && words.len().min(usize::from(self.accuracy.level())) == 1 {
            if let Some(word) = one_word_idiom(&interval) {
                debug!(idiom = word, "one-word distance");
                return Ok(self.with_suffix(&interval, word));
            }
            if interval.total_days < 3 {
                if let Some(word) = near_day_idiom(&interval, target, &reference)? {
                    debug!(idiom = word, "near-day distance");
                    return Ok(word.to_string());
                }
            }
        }

        Ok(self.with_suffix(&interval, &words.join(", ")))
    }

    fn with_suffix(&self, interval: &CalendarInterval, phrase: &str) -> String {
        if interval.inverted {
            format!("{}\u{a0}{phrase}", self.prefix_in)
        } else {
            format!("{phrase}\u{a0}{}", self.suffix_ago)
        }
    }
}

/// Describe the distance from `reference` (or the current time) to
/// `target` with default words.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rutils::{Accuracy, distance_of_time_in_words};
///
/// let reference = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
/// let target = Utc.with_ymd_and_hms(2024, 5, 10, 12, 25, 0).unwrap();
/// assert_eq!(
///     distance_of_time_in_words(&target, Some(&reference), Accuracy::Minute).unwrap(),
///     "через\u{a0}25\u{a0}минут"
/// );
/// ```
pub fn distance_of_time_in_words<Tz: TimeZone>(
    target: &DateTime<Tz>,
    reference: Option<&DateTime<Tz>>,
    accuracy: Accuracy,
) -> Result<String, RutilsError> {
    DistanceOptions::with_accuracy(accuracy).phrase(target, reference)
}

/// Describe the distance from `now` to `target`, treating `now` as the
/// current time so that idioms ("вчера", "через час") apply.
pub fn distance_from_now<Tz: TimeZone>(
    target: &DateTime<Tz>,
    now: &DateTime<Tz>,
    accuracy: Accuracy,
) -> Result<String, RutilsError> {
    DistanceOptions::with_accuracy(accuracy).phrase_from_now(target, now)
}

/// Full years of age today.
pub fn age<Tz: TimeZone>(birth: &DateTime<Tz>) -> Result<u32, RutilsError> {
    let now = Utc::now().with_timezone(&birth.timezone());
    age_at(birth, &now)
}

/// Full years of age at `now`.
pub fn age_at<Tz: TimeZone>(birth: &DateTime<Tz>, now: &DateTime<Tz>) -> Result<u32, RutilsError> {
    let interval = CalendarInterval::between(birth, now)?;
    if interval.inverted {
        return Err(RutilsError::invalid("birth date is in the future"));
    }
    Ok(interval.years)
}

fn one_word_idiom(interval: &CalendarInterval) -> Option<&'static str> {
    if interval.total_days == 0 && interval.hours == 0 && interval.minutes == 1 {
        Some(ONE_MINUTE)
    } else if interval.total_days == 0 && interval.hours == 1 {
        Some(ONE_HOUR)
    } else if interval.years == 0 && interval.months == 1 {
        Some(ONE_MONTH)
    } else if interval.years == 1 {
        Some(ONE_YEAR)
    } else {
        None
    }
}

/// "вчера", "позавчера", "завтра" or "послезавтра". Future idioms are decided
/// by the midnights following `now`, not by elapsed hours.
fn near_day_idiom<Tz: TimeZone>(
    interval: &CalendarInterval,
    target: &DateTime<Tz>,
    now: &DateTime<Tz>,
) -> Result<Option<&'static str>, RutilsError> {
    let days = interval.total_days;
    if !interval.inverted {
        return Ok(match days {
            1 => Some(YESTERDAY),
            2 => Some(DAY_BEFORE_YESTERDAY),
            _ => None,
        });
    }
    if days > 1 {
        return Ok(None);
    }

    let tomorrow = midnight_after(now, 1)?;
    let after_tomorrow = midnight_after(now, 2)?;
    if *target >= tomorrow && *target < after_tomorrow {
        Ok(Some(TOMORROW))
    } else if days == 1 && *target >= after_tomorrow {
        Ok(Some(DAY_AFTER_TOMORROW))
    } else {
        Ok(None)
    }
}

/// Midnight `days` calendar days after `now`'s date, in `now`'s zone.
fn midnight_after<Tz: TimeZone>(now: &DateTime<Tz>, days: u64) -> Result<DateTime<Tz>, RutilsError> {
    let date = now
        .date_naive()
        .checked_add_days(Days::new(days))
        .ok_or_else(|| RutilsError::internal("date overflow while computing midnight"))?;
    now.timezone()
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| RutilsError::internal(format!("no midnight on {date} in this time zone")))
}
