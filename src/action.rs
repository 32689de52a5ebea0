use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Choice available to the active player at every turn-step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die and add the face to the turn total.
    Roll,
    /// Bank the turn total and pass control to the opponent.
    Hold,
}

impl Decision {
    /// Single-letter code typed at the console prompt.
    pub fn code(&self) -> &'static str {
        match self {
            Decision::Roll => "r",
            Decision::Hold => "h",
        }
    }
}

impl FromStr for Decision {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "r" => Ok(Decision::Roll),
            "h" => Ok(Decision::Hold),
            other => Err(GameError::InvalidDecision(other.to_string())),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
