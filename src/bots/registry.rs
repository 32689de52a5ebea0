use tracing::info;

use crate::Bot;
use crate::bots::{ComputerBot, HumanBot};
use crate::error::GameError;
use crate::player::{Player, PlayerKind};
use crate::state::PLAYER_COUNT;

/// Builds both seats from their configuration values (`"human"` or `"computer"`).
///
/// Either value being anything else fails the whole call; no player is created.
pub fn build_players(first: &str, second: &str) -> Result<[Player; PLAYER_COUNT], GameError> {
    let first: PlayerKind = first.parse()?;
    let second: PlayerKind = second.parse()?;
    info!(player1 = %first, player2 = %second, "players configured");
    Ok([Player::new(first), Player::new(second)])
}

/// Create the decision maker for a seat. Humans are prompted on stdin/stdout.
pub fn create_bot(kind: PlayerKind) -> Box<dyn Bot> {
    match kind {
        PlayerKind::Human => Box::new(HumanBot::stdio()),
        PlayerKind::Computer => Box::new(ComputerBot::new()),
    }
}
