//! Integration tests for relative time phrases.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use rutils::{
    Accuracy, CalendarInterval, DistanceField, DistanceOptions, DistanceTable, RutilsError, age,
    age_at, distance_from_now, distance_of_time_in_words,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn phrase(target: DateTime<Utc>, reference: DateTime<Utc>, accuracy: Accuracy) -> String {
    distance_of_time_in_words(&target, Some(&reference), accuracy).unwrap()
}

fn from_now(target: DateTime<Utc>, now: DateTime<Utc>, accuracy: Accuracy) -> String {
    distance_from_now(&target, &now, accuracy).unwrap()
}

// =========================================================================
// Under a Minute
// =========================================================================

#[test]
fn identical_instants_are_less_than_a_minute_ago() {
    let now = at(2024, 5, 10, 12, 0);
    assert_eq!(phrase(now, now, Accuracy::Year), "менее минуты назад");
    assert_eq!(from_now(now, now, Accuracy::Minute), "менее минуты назад");
}

#[test]
fn seconds_in_the_future_are_less_than_a_minute() {
    let now = at(2024, 5, 10, 12, 0);
    let target = now + Duration::seconds(30);
    assert_eq!(phrase(target, now, Accuracy::Minute), "менее чем через минуту");
}

#[test]
fn current_time_without_reference() {
    let result = distance_of_time_in_words(&Utc::now(), None, Accuracy::Year).unwrap();
    assert_eq!(result, "менее минуты назад");

    let decade = Utc::now() - Duration::days(3650);
    let result = distance_of_time_in_words(&decade, None, Accuracy::Year).unwrap();
    assert_eq!(result, "9\u{a0}лет\u{a0}назад");
}

// =========================================================================
// One-Word Idioms
// =========================================================================

#[test]
fn one_year_from_now_is_a_single_word() {
    let now = at(2024, 5, 10, 12, 0);
    assert_eq!(
        from_now(at(2023, 5, 10, 12, 0), now, Accuracy::Year),
        "год\u{a0}назад"
    );
    assert_eq!(
        from_now(at(2025, 5, 10, 12, 0), now, Accuracy::Year),
        "через\u{a0}год"
    );
}

#[test]
fn one_year_with_explicit_reference_keeps_the_number() {
    let reference = at(2024, 5, 10, 12, 0);
    assert_eq!(
        phrase(at(2023, 5, 10, 12, 0), reference, Accuracy::Year),
        "1\u{a0}год\u{a0}назад"
    );
}

#[test]
fn one_hour_and_one_minute() {
    let now = at(2024, 5, 10, 12, 0);
    assert_eq!(
        from_now(at(2024, 5, 10, 11, 0), now, Accuracy::Minute),
        "час\u{a0}назад"
    );
    assert_eq!(
        from_now(at(2024, 5, 10, 13, 0), now, Accuracy::Year),
        "через\u{a0}час"
    );

    let target = Utc.with_ymd_and_hms(2024, 5, 10, 11, 58, 30).unwrap();
    assert_eq!(from_now(target, now, Accuracy::Minute), "минуту\u{a0}назад");
}

#[test]
fn one_month_ignores_extra_days_at_coarse_accuracy() {
    let now = at(2024, 5, 10, 12, 0);
    assert_eq!(
        from_now(at(2024, 4, 5, 12, 0), now, Accuracy::Year),
        "месяц\u{a0}назад"
    );
}

#[test]
fn several_words_skip_idioms() {
    let now = at(2024, 5, 10, 12, 0);
    let target = at(2024, 5, 10, 10, 30);
    assert_eq!(
        from_now(target, now, Accuracy::Minute),
        "1\u{a0}час, 30\u{a0}минут\u{a0}назад"
    );
    assert_eq!(from_now(target, now, Accuracy::Year), "час\u{a0}назад");
}

#[test]
fn end_of_january_to_end_of_february_counts_days() {
    let now = at(2023, 2, 28, 12, 0);
    assert_eq!(
        from_now(at(2023, 1, 31, 12, 0), now, Accuracy::Year),
        "28\u{a0}дней\u{a0}назад"
    );
    assert_eq!(
        from_now(at(2023, 1, 29, 12, 0), now, Accuracy::Year),
        "30\u{a0}дней\u{a0}назад"
    );
    assert_eq!(
        from_now(at(2023, 1, 28, 12, 0), now, Accuracy::Year),
        "месяц\u{a0}назад"
    );
}

// =========================================================================
// Near-Day Idioms
// =========================================================================

#[test]
fn yesterday_and_day_before() {
    let now = at(2024, 5, 10, 12, 0);
    assert_eq!(from_now(at(2024, 5, 9, 10, 0), now, Accuracy::Year), "вчера");
    assert_eq!(
        from_now(at(2024, 5, 8, 9, 0), now, Accuracy::Year),
        "позавчера"
    );
    assert_eq!(
        from_now(at(2024, 5, 7, 12, 0), now, Accuracy::Year),
        "3\u{a0}дня\u{a0}назад"
    );
}

#[test]
fn yesterday_needs_relative_mode() {
    let reference = at(2024, 5, 10, 12, 0);
    assert_eq!(
        phrase(at(2024, 5, 9, 10, 0), reference, Accuracy::Year),
        "1\u{a0}день\u{a0}назад"
    );
}

#[test]
fn tomorrow_uses_midnight_not_elapsed_hours() {
    let late = at(2024, 5, 10, 23, 50);
    let target = late + Duration::hours(20);
    assert_eq!(from_now(target, late, Accuracy::Year), "завтра");

    let early = at(2024, 5, 10, 1, 0);
    let target = early + Duration::hours(20);
    assert_eq!(
        from_now(target, early, Accuracy::Year),
        "через\u{a0}20\u{a0}часов"
    );
}

#[test]
fn tomorrow_with_a_whole_day_between() {
    let now = at(2024, 5, 10, 8, 0);
    assert_eq!(from_now(at(2024, 5, 11, 9, 0), now, Accuracy::Year), "завтра");
}

#[test]
fn day_after_tomorrow() {
    let now = at(2024, 5, 10, 23, 50);
    assert_eq!(
        from_now(at(2024, 5, 12, 10, 0), now, Accuracy::Year),
        "послезавтра"
    );
}

#[test]
fn midnight_follows_the_target_time_zone() {
    let msk = FixedOffset::east_opt(3 * 3600).unwrap();
    let now = msk.with_ymd_and_hms(2024, 5, 11, 1, 30, 0).unwrap();
    let target = msk.with_ymd_and_hms(2024, 5, 11, 21, 0, 0).unwrap();

    // 22:30 and 18:00 the next day in UTC
    assert_eq!(
        distance_from_now(&target.with_timezone(&Utc), &now.with_timezone(&Utc), Accuracy::Year)
            .unwrap(),
        "завтра"
    );
    // the same evening in Moscow
    assert_eq!(
        distance_from_now(&target, &now, Accuracy::Year).unwrap(),
        "через\u{a0}19\u{a0}часов"
    );
}

// =========================================================================
// Accuracy Walk
// =========================================================================

#[test]
fn years_and_months_at_month_accuracy() {
    let reference = at(2024, 5, 10, 12, 0);
    let target = at(2022, 2, 10, 12, 0);
    assert_eq!(
        phrase(target, reference, Accuracy::Year),
        "2\u{a0}года\u{a0}назад"
    );
    assert_eq!(
        phrase(target, reference, Accuracy::Month),
        "2\u{a0}года, 3\u{a0}месяца\u{a0}назад"
    );
}

#[test]
fn empty_slot_does_not_borrow_finer_fields() {
    let reference = at(2024, 5, 15, 15, 0);
    let target = at(2023, 5, 10, 12, 0);
    assert_eq!(
        phrase(target, reference, Accuracy::Month),
        "1\u{a0}год\u{a0}назад"
    );
    assert_eq!(
        phrase(target, reference, Accuracy::Day),
        "1\u{a0}год, 5\u{a0}дней\u{a0}назад"
    );
    assert_eq!(
        phrase(target, reference, Accuracy::Minute),
        "1\u{a0}год, 5\u{a0}дней, 3\u{a0}часа\u{a0}назад"
    );
}

#[test]
fn coarsest_accuracy_reports_finest_populated_field() {
    let reference = at(2024, 5, 10, 12, 0);
    let target = at(2024, 5, 10, 12, 25);
    assert_eq!(
        phrase(target, reference, Accuracy::Year),
        "через\u{a0}25\u{a0}минут"
    );
}

#[test]
fn distance_table_keeps_only_non_zero_fields() {
    let interval = CalendarInterval {
        years: 2,
        hours: 5,
        total_days: 731,
        ..Default::default()
    };
    let table = DistanceTable::from_interval(&interval).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(DistanceField::Years), Some("2\u{a0}года"));
    assert_eq!(table.get(DistanceField::Months), None);
    let codes: Vec<char> = table.iter().map(|(field, _)| field.code()).collect();
    assert_eq!(codes, vec!['y', 'h']);
    assert!(!table.is_empty());

    let empty = DistanceTable::from_interval(&CalendarInterval::default()).unwrap();
    assert!(empty.is_empty());
    assert!(empty.select(Accuracy::Minute).is_empty());
}

// =========================================================================
// Options and Errors
// =========================================================================

#[test]
fn custom_prefix_and_suffix() {
    let options = DistanceOptions::builder()
        .accuracy(Accuracy::Day)
        .prefix_in("спустя")
        .suffix_ago("тому назад")
        .build();
    let reference = at(2024, 5, 10, 12, 0);
    assert_eq!(
        options
            .phrase(&at(2024, 5, 13, 12, 0), Some(&reference))
            .unwrap(),
        "спустя\u{a0}3\u{a0}дня"
    );
    assert_eq!(
        options
            .phrase(&at(2024, 5, 7, 12, 0), Some(&reference))
            .unwrap(),
        "3\u{a0}дня\u{a0}тому назад"
    );
}

#[test]
fn default_options() {
    let options = DistanceOptions::default();
    assert_eq!(options.accuracy(), Accuracy::Year);
    assert_eq!(options.prefix_in(), "через");
    assert_eq!(options.suffix_ago(), "назад");
}

#[test]
fn accuracy_outside_levels_is_invalid() {
    assert!(matches!(
        Accuracy::try_from(0),
        Err(RutilsError::InvalidInput { .. })
    ));
    assert!(Accuracy::try_from(6).is_err());
    assert_eq!(Accuracy::try_from(5).unwrap(), Accuracy::Minute);
    assert_eq!("day".parse::<Accuracy>().unwrap(), Accuracy::Day);
    assert_eq!("2".parse::<Accuracy>().unwrap(), Accuracy::Month);
    assert!("week".parse::<Accuracy>().is_err());
}

// =========================================================================
// Age
// =========================================================================

#[test]
fn age_counts_full_years() {
    let birth = at(1990, 6, 15, 0, 0);
    assert_eq!(age_at(&birth, &at(2024, 6, 14, 12, 0)).unwrap(), 33);
    assert_eq!(age_at(&birth, &at(2024, 6, 15, 0, 0)).unwrap(), 34);
    assert!(age(&birth).unwrap() >= 34);
}

#[test]
fn leap_day_birthday() {
    let birth = at(2024, 2, 29, 0, 0);
    assert_eq!(age_at(&birth, &at(2025, 2, 28, 0, 0)).unwrap(), 0);
    assert_eq!(age_at(&birth, &at(2025, 3, 1, 0, 0)).unwrap(), 1);
    assert_eq!(age_at(&birth, &at(2028, 2, 29, 0, 0)).unwrap(), 4);
}

#[test]
fn birth_in_the_future_is_rejected() {
    let err = age_at(&at(2030, 1, 1, 0, 0), &at(2024, 6, 15, 0, 0)).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("future"));
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn interval_serializes_all_components() {
    let reference = at(2024, 5, 10, 12, 0);
    let interval = CalendarInterval::between(&at(2022, 2, 5, 8, 15), &reference).unwrap();
    let json = serde_json::to_value(interval).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "years": 2,
            "months": 3,
            "days": 5,
            "hours": 3,
            "minutes": 45,
            "seconds": 0,
            "total_days": 825,
            "inverted": false,
        })
    );
    assert_eq!(
        serde_json::to_value(Accuracy::Minute).unwrap(),
        serde_json::json!("minute")
    );
}
