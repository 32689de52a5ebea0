use std::io;

use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur while configuring or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("A player must be either a 'human' or 'computer' (got '{0}')")]
    InvalidPlayerKind(String),
    #[error("decision must be 'r' or 'h' (got '{0}')")]
    InvalidDecision(String),
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("input closed while waiting for a decision")]
    InputClosed,
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}
