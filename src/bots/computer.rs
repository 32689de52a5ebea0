use tracing::debug;

use crate::action::Decision;
use crate::bot::Bot;
use crate::error::GameError;
use crate::player::WINNING_SCORE;
use crate::state::TurnView;

/// Most points the computer will leave at risk in a single turn.
pub const RISK_CAP: u32 = 25;

/// Threshold strategy: keep rolling until the turn total exceeds
/// `min(25, points still needed to win)`, then hold.
pub fn computer_decision(turn_total: u32, prospective_score: u32) -> Decision {
    let threshold = RISK_CAP.min(WINNING_SCORE.saturating_sub(prospective_score));
    if turn_total > threshold {
        Decision::Hold
    } else {
        Decision::Roll
    }
}

/// Bot wrapper around [`computer_decision`]; stateless, re-evaluated each step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComputerBot;

impl ComputerBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for ComputerBot {
    fn decide(&mut self, view: &TurnView) -> Result<Decision, GameError> {
        let decision = computer_decision(view.turn_total, view.prospective_score);
        debug!(
            player = view.self_player,
            turn_total = view.turn_total,
            prospective = view.prospective_score,
            %decision,
            "computer decided"
        );
        Ok(decision)
    }
}
