//! Two-player console Pig: roll to build a turn total, hold to bank it, bust on a one.

pub mod action;
pub mod bot;
pub mod bots;
pub mod die;
pub mod error;
pub mod game;
pub mod player;
pub mod session;
pub mod state;
pub mod visualize;

pub use crate::action::{Decision, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::{ComputerBot, HumanBot, build_players, computer_decision, create_bot};
pub use crate::die::Die;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig, RollResult, StepOutcome, resolve_time_up};
pub use crate::player::{Player, PlayerKind, WINNING_SCORE};
pub use crate::session::Session;
pub use crate::state::{GameStatus, TurnPhase, TurnView};
