//! Relative time phrases and Russian date formatting.
//!
//! All functions take `chrono` date-times. Phrases are computed on the wall
//! clock of the target's time zone; the reference instant is converted into
//! that zone first.

mod distance;
mod format;
mod instant;
mod interval;
mod tables;

pub use distance::{
    DistanceField, DistanceOptions, DistanceTable, age, age_at, distance_from_now,
    distance_of_time_in_words,
};
pub use format::{DateFormat, format_date};
pub use instant::parse_instant;
pub use interval::CalendarInterval;
pub use tables::{PREFIX_IN, SUFFIX_AGO};
