use crate::action::Decision;
use crate::error::GameError;
use crate::state::TurnView;

/// Interface for anything that can make roll/hold decisions for a seat.
pub trait Bot {
    fn decide(&mut self, view: &TurnView) -> Result<Decision, GameError>;
}
