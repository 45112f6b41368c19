//! Fixed words for time phrases and date formatting.

/// Word placed before a future phrase ("через час").
pub const PREFIX_IN: &str = "через";

/// Word placed after a past phrase ("час назад").
pub const SUFFIX_AGO: &str = "назад";

pub(crate) const LESS_THAN_MINUTE_AGO: &str = "менее минуты назад";
pub(crate) const LESS_THAN_MINUTE_IN: &str = "менее чем через минуту";

pub(crate) const YESTERDAY: &str = "вчера";
pub(crate) const DAY_BEFORE_YESTERDAY: &str = "позавчера";
pub(crate) const TOMORROW: &str = "завтра";
pub(crate) const DAY_AFTER_TOMORROW: &str = "послезавтра";

pub(crate) const ONE_MINUTE: &str = "минуту";
pub(crate) const ONE_HOUR: &str = "час";
pub(crate) const ONE_MONTH: &str = "месяц";
pub(crate) const ONE_YEAR: &str = "год";

pub(crate) const YEAR_FORMS: [&str; 3] = ["год", "года", "лет"];
pub(crate) const MONTH_FORMS: [&str; 3] = ["месяц", "месяца", "месяцев"];
pub(crate) const DAY_FORMS: [&str; 3] = ["день", "дня", "дней"];
pub(crate) const HOUR_FORMS: [&str; 3] = ["час", "часа", "часов"];
pub(crate) const MINUTE_FORMS: [&str; 3] = ["минуту", "минуты", "минут"];

/// Names of a weekday.
pub(crate) struct DayName {
    pub short: &'static str,
    pub full: &'static str,
    /// Accusative, as in "в среду".
    pub accusative: &'static str,
    /// Preposition with a trailing non-breaking space.
    pub preposition: &'static str,
}

/// Monday first, matching `Weekday::num_days_from_monday`.
pub(crate) const DAY_NAMES: [DayName; 7] = [
    DayName {
        short: "пн",
        full: "понедельник",
        accusative: "понедельник",
        preposition: "в\u{a0}",
    },
    DayName {
        short: "вт",
        full: "вторник",
        accusative: "вторник",
        preposition: "во\u{a0}",
    },
    DayName {
        short: "ср",
        full: "среда",
        accusative: "среду",
        preposition: "в\u{a0}",
    },
    DayName {
        short: "чт",
        full: "четверг",
        accusative: "четверг",
        preposition: "в\u{a0}",
    },
    DayName {
        short: "пт",
        full: "пятница",
        accusative: "пятницу",
        preposition: "в\u{a0}",
    },
    DayName {
        short: "сб",
        full: "суббота",
        accusative: "субботу",
        preposition: "в\u{a0}",
    },
    DayName {
        short: "вск",
        full: "воскресенье",
        accusative: "воскресенье",
        preposition: "в\u{a0}",
    },
];

/// Short, nominative and genitive month names, January first.
pub(crate) const MONTH_NAMES: [[&str; 3]; 12] = [
    ["янв", "январь", "января"],
    ["фев", "февраль", "февраля"],
    ["мар", "март", "марта"],
    ["апр", "апрель", "апреля"],
    ["май", "май", "мая"],
    ["июн", "июнь", "июня"],
    ["июл", "июль", "июля"],
    ["авг", "август", "августа"],
    ["сен", "сентябрь", "сентября"],
    ["окт", "октябрь", "октября"],
    ["ноя", "ноябрь", "ноября"],
    ["дек", "декабрь", "декабря"],
];
