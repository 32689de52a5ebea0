//! Console driver: asks each seat's bot for decisions, feeds them to the
//! engine and prints the running transcript.

use std::io::Write;

use crate::bot::Bot;
use crate::error::GameError;
use crate::game::{Game, RollResult, StepOutcome};
use crate::state::{GameStatus, PLAYER_COUNT};
use crate::visualize::{
    render_banner, render_bust, render_draw, render_roll, render_scores, render_time_up,
    render_winner,
};

pub struct Session<W: Write> {
    game: Game,
    bots: [Box<dyn Bot>; PLAYER_COUNT],
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(game: Game, bots: [Box<dyn Bot>; PLAYER_COUNT], out: W) -> Self {
        Self { game, bots, out }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.out)
    }

    /// Plays until someone wins or the clock forces a result.
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        self.out.write_all(render_banner().as_bytes())?;
        while !self.game.is_finished() {
            self.play_turn()?;
            match self.game.status() {
                GameStatus::Draw => {
                    self.out
                        .write_all(render_draw(self.game.players()).as_bytes())?;
                }
                GameStatus::Finished { winner } => {
                    self.out
                        .write_all(render_scores(self.game.players()).as_bytes())?;
                    self.out.write_all(render_winner(winner).as_bytes())?;
                }
                GameStatus::Ongoing => {
                    self.out
                        .write_all(render_scores(self.game.players()).as_bytes())?;
                }
            }
            self.out.flush()?;
        }
        Ok(self.game.status())
    }

    /// Runs turn-steps for the active player until control passes on or the game ends.
    fn play_turn(&mut self) -> Result<(), GameError> {
        let player = self.game.current_player();
        loop {
            let view = self.game.turn_view(player)?;
            let decision = self.bots[player].decide(&view)?;
            match self.game.apply_decision(player, decision)? {
                StepOutcome::Held { .. } => return Ok(()),
                StepOutcome::TimeUp { .. } => {
                    self.out.write_all(render_time_up().as_bytes())?;
                    return Ok(());
                }
                StepOutcome::Rolled {
                    face,
                    turn_total,
                    scores,
                    result,
                } => {
                    let block = render_roll(player, face, turn_total, &scores);
                    self.out.write_all(block.as_bytes())?;
                    match result {
                        RollResult::Continue => self.out.flush()?,
                        RollResult::Bust => {
                            self.out.write_all(render_bust(player).as_bytes())?;
                            return Ok(());
                        }
                        RollResult::Won => return Ok(()),
                    }
                }
            }
        }
    }
}
