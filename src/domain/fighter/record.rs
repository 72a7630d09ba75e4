//! Win-loss-draw record value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A professional record, written `"wins-losses-draws"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FightRecord {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl FightRecord {
    pub fn new(wins: u32, losses: u32, draws: u32) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Fraction of decided fights that were won, in [0, 1].
    ///
    /// Draws are ignored. A fighter with no decided fights has a win rate
    /// of zero. Summed in `f64` so extreme records cannot overflow.
    pub fn win_rate(&self) -> f64 {
        let decided = f64::from(self.wins) + f64::from(self.losses);
        if decided == 0.0 {
            return 0.0;
        }
        f64::from(self.wins) / decided
    }
}

impl FromStr for FightRecord {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ValidationError::invalid_format(
                "record",
                format!("expected 'wins-losses-draws', got '{}'", s),
            ));
        }

        let parse = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                ValidationError::invalid_format(
                    "record",
                    format!("'{}' is not a non-negative integer", part),
                )
            })
        };

        Ok(Self::new(parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
    }
}

impl TryFrom<String> for FightRecord {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FightRecord> for String {
    fn from(record: FightRecord) -> Self {
        record.to_string()
    }
}

impl fmt::Display for FightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}
