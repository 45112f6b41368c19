use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RutilsError;

/// The finest time unit a relative-time phrase may mention.
///
/// Levels are ordered coarsest first. The level number is also the maximum
/// number of unit words a phrase can contain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    #[default]
    Year = 1,
    Month = 2,
    Day = 3,
    Hour = 4,
    Minute = 5,
}

impl Accuracy {
    pub const ALL: [Accuracy; 5] = [
        Accuracy::Year,
        Accuracy::Month,
        Accuracy::Day,
        Accuracy::Hour,
        Accuracy::Minute,
    ];

    /// Numeric level, 1 (year) through 5 (minute).
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accuracy::Year => "year",
            Accuracy::Month => "month",
            Accuracy::Day => "day",
            Accuracy::Hour => "hour",
            Accuracy::Minute => "minute",
        }
    }
}

impl TryFrom<u8> for Accuracy {
    type Error = RutilsError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Accuracy::ALL
            .into_iter()
            .find(|accuracy| accuracy.level() == level)
            .ok_or_else(|| {
                RutilsError::invalid(format!("wrong accuracy value {level} (must be 1..5)"))
            })
    }
}

impl FromStr for Accuracy {
    type Err = RutilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Accuracy::try_from(level);
        }
        Accuracy::ALL
            .into_iter()
            .find(|accuracy| accuracy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RutilsError::invalid(format!(
                    "unknown accuracy '{s}', expected year, month, day, hour or minute"
                ))
            })
    }
}

impl Display for Accuracy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
