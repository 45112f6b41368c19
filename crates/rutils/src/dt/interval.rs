//! Calendar-aware difference between two instants.

use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone, Timelike};
use serde::Serialize;

use crate::RutilsError;

/// The gap between two instants split into calendar components.
///
/// Components are the field-wise differences of the two wall-clock times,
/// each negative field borrowing from the next coarser one. A day borrow
/// adds the length of the month before the later date's month, so January 31
/// to February 28 is 28 days rather than a month, and February 29 to the
/// next February 28 is 11 months and 30 days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rutils::CalendarInterval;
///
/// let target = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let interval = CalendarInterval::between_naive(target, reference).unwrap();
/// assert_eq!((interval.months, interval.days), (0, 30));
/// assert_eq!(interval.total_days, 30);
/// assert!(!interval.inverted);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarInterval {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Whole days between the two instants, ignoring the other components.
    pub total_days: u64,
    /// True when the target lies after the reference, i.e. in the future.
    pub inverted: bool,
}

impl CalendarInterval {
    /// Interval from `reference` to `target`, measured on the wall clock of
    /// the target's time zone.
    pub fn between<Tz: TimeZone, Rz: TimeZone>(
        target: &DateTime<Tz>,
        reference: &DateTime<Rz>,
    ) -> Result<Self, RutilsError> {
        let reference = reference.with_timezone(&target.timezone());
        Self::between_naive(target.naive_local(), reference.naive_local())
    }

    /// Interval from `reference` to `target` for zone-less date-times.
    pub fn between_naive(
        target: NaiveDateTime,
        reference: NaiveDateTime,
    ) -> Result<Self, RutilsError> {
        let inverted = target > reference;
        let (start, end) = if inverted {
            (reference, target)
        } else {
            (target, reference)
        };

        let mut years = i64::from(end.year()) - i64::from(start.year());
        let mut months = i64::from(end.month()) - i64::from(start.month());
        let mut days = i64::from(end.day()) - i64::from(start.day());
        let mut hours = i64::from(end.hour()) - i64::from(start.hour());
        let mut minutes = i64::from(end.minute()) - i64::from(start.minute());
        let mut seconds = i64::from(end.second()) - i64::from(start.second());

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }
        // borrowed days come from the months preceding the end's month
        let mut month_end = end
            .date()
            .with_day(1)
            .ok_or_else(|| RutilsError::internal(format!("no first day in month of {end}")))?;
        while days < 0 {
            let month_start = month_end
                .checked_sub_months(Months::new(1))
                .ok_or_else(|| RutilsError::internal(format!("no month before {month_end}")))?;
            days += (month_end - month_start).num_days();
            months -= 1;
            month_end = month_start;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        Ok(Self {
            years: component(years, "years")?,
            months: component(months, "months")?,
            days: component(days, "days")?,
            hours: component(hours, "hours")?,
            minutes: component(minutes, "minutes")?,
            seconds: component(seconds, "seconds")?,
            total_days: u64::try_from((end - start).num_days())
                .map_err(|_| RutilsError::internal("negative total day count"))?,
            inverted,
        })
    }

    /// True when no whole minute separates the two instants.
    pub fn is_under_a_minute(&self) -> bool {
        self.total_days == 0 && self.hours == 0 && self.minutes == 0
    }
}

fn component(value: i64, name: &str) -> Result<u32, RutilsError> {
    u32::try_from(value)
        .map_err(|_| RutilsError::internal(format!("{name} component out of range: {value}")))
}
