use serde::{Deserialize, Serialize};

use crate::action::{Decision, PlayerId};

pub const PLAYER_COUNT: usize = 2;

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
    /// Time ran out with both banked scores equal.
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Where the turn state machine currently sits.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingDecision(PlayerId),
    Resolving(PlayerId, Decision),
    GameOver,
}

/// Snapshot handed to a bot when it has to decide.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnView {
    pub self_player: PlayerId,
    pub score: u32,
    pub turn_total: u32,
    pub prospective_score: u32,
    pub opponent_score: u32,
    pub winning_score: u32,
}
