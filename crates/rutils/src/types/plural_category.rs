use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// One of the three Russian cardinal plural forms.
///
/// Forms are always supplied in this order: the form for 1 ("минута"), the
/// form for 2–4 ("минуты") and the form for 5 and above ("минут").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

impl PluralCategory {
    /// Position of this category in a three-form table.
    pub fn index(self) -> usize {
        match self {
            PluralCategory::One => 0,
            PluralCategory::Few => 1,
            PluralCategory::Many => 2,
        }
    }

    /// Get the category name as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::One => "one",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
