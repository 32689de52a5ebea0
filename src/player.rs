use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::die::BUST_FACE;
use crate::error::GameError;

/// Prospective score that ends the game.
pub const WINNING_SCORE: u32 = 100;

/// Who makes the roll/hold decisions for a seat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(GameError::InvalidPlayerKind(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score keeping for one seat.
///
/// The banked score never decreases; the turn total is dropped on a bust and
/// moved into the banked score on a hold or a winning roll.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    kind: PlayerKind,
    score: u32,
    turn_total: u32,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            score: 0,
            turn_total: 0,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer)
    }

    /// Banked score.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Banked score plus the points at risk this turn.
    pub fn prospective_score(&self) -> u32 {
        self.score + self.turn_total
    }

    pub fn apply_roll(&mut self, face: u8) {
        if face == BUST_FACE {
            self.turn_total = 0;
        } else {
            self.turn_total += u32::from(face);
        }
    }

    pub fn hold(&mut self) {
        self.score += self.turn_total;
        self.turn_total = 0;
    }

    /// Banks the turn total as part of a winning roll, without a separate hold.
    pub fn commit_prospective_score(&mut self) {
        self.score = self.prospective_score();
        self.turn_total = 0;
    }
}
