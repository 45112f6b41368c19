use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RutilsError;

/// Grammatical gender of a counted noun.
///
/// Gender picks the stem of "1" and "2" (один/одна/одно, два/две) and is
/// carried by every [`Noun`](crate::Noun) so that a quantity agrees with
/// the word it counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// All genders in table order.
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// Short tag used on the command line and in diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Masculine => "masc",
            Gender::Feminine => "fem",
            Gender::Neuter => "neut",
        }
    }

    /// Column of this gender in the ones table.
    pub(crate) fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
            Gender::Neuter => 2,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Gender {
    type Err = RutilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" | "male" => Ok(Gender::Masculine),
            "f" | "fem" | "feminine" | "female" => Ok(Gender::Feminine),
            "n" | "neut" | "neuter" => Ok(Gender::Neuter),
            other => Err(RutilsError::invalid(format!(
                "unknown gender '{other}', expected one of: masc, fem, neut"
            ))),
        }
    }
}
