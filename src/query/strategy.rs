//! Boolean combination strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JavelinError;

/// How the posting sets of a query's tokens are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Intersection: records containing every query token.
    All,
    /// Union: records containing at least one query token.
    Any,
    /// Complement: records containing none of the query tokens.
    None,
}

impl Strategy {
    /// All strategy values, in declaration order.
    pub const ALL_STRATEGIES: [Strategy; 3] = [Strategy::All, Strategy::Any, Strategy::None];

    /// The canonical name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::All => "ALL",
            Strategy::Any => "ANY",
            Strategy::None => "NONE",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = JavelinError;

    /// Parse exactly one of the three recognized strategy names.
    ///
    /// Anything else — including lower-case spellings — is a caller error and
    /// is rejected here rather than silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Strategy::All),
            "ANY" => Ok(Strategy::Any),
            "NONE" => Ok(Strategy::None),
            other => Err(JavelinError::query(format!(
                "unknown strategy {other:?}, expected ALL, ANY or NONE"
            ))),
        }
    }
}
