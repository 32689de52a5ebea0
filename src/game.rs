use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::action::{Decision, PlayerId};
use crate::die::{BUST_FACE, Die, is_valid_face};
use crate::error::GameError;
use crate::player::{Player, WINNING_SCORE};
use crate::state::{GameStatus, PLAYER_COUNT, TurnPhase, TurnView};

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub timed: bool,
    pub seed: u64,
    pub time_limit: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timed: false,
            seed: DEFAULT_SEED,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

/// Builder that enables deterministic roll injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    players: [Player; PLAYER_COUNT],
    rolls: Vec<u8>,
    started_at: Option<Instant>,
}

impl GameBuilder {
    pub fn new(players: [Player; PLAYER_COUNT]) -> Self {
        Self {
            config: GameConfig::default(),
            players,
            rolls: Vec::new(),
            started_at: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn timed(mut self, timed: bool) -> Self {
        self.config.timed = timed;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = limit;
        self
    }

    /// Pretend the clock started at `started_at` instead of at `build`.
    pub fn with_started_at(mut self, started_at: Instant) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Faces the die returns, in order, before drawing from the seeded source.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u8>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Result of resolving a single decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The turn total was banked; control passes to the opponent.
    Held { score: u32 },
    Rolled {
        face: u8,
        /// Turn total right after the roll, before any winning commit.
        turn_total: u32,
        /// Banked scores of both seats at the same moment.
        scores: [u32; PLAYER_COUNT],
        result: RollResult,
    },
    /// The time limit expired before the decision could be applied.
    TimeUp { status: GameStatus },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollResult {
    /// Same player decides again.
    Continue,
    /// Rolled a one; turn lost.
    Bust,
    Won,
}

/// Core Pig engine.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    status: GameStatus,
    phase: TurnPhase,
    current_player: PlayerId,
    players: [Player; PLAYER_COUNT],
    die: Die,
    started_at: Instant,
    /// No decision has been resolved yet in the active player's turn.
    turn_opening: bool,
}

impl Game {
    pub fn builder(players: [Player; PLAYER_COUNT]) -> GameBuilder {
        GameBuilder::new(players)
    }

    pub fn new(players: [Player; PLAYER_COUNT], config: GameConfig) -> Result<Self, GameError> {
        GameBuilder::new(players).with_config(config).build()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn is_timed(&self) -> bool {
        self.config.timed
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::InvalidPlayer(id))
    }

    pub fn scores(&self) -> [u32; PLAYER_COUNT] {
        [self.players[0].score(), self.players[1].score()]
    }

    pub fn die(&self) -> &Die {
        &self.die
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn is_time_up(&self) -> bool {
        self.config.timed && self.elapsed() > self.config.time_limit
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn turn_view(&self, player: PlayerId) -> Result<TurnView, GameError> {
        let me = self.player(player)?;
        let opponent = &self.players[(player + 1) % PLAYER_COUNT];
        Ok(TurnView {
            self_player: player,
            score: me.score(),
            turn_total: me.turn_total(),
            prospective_score: me.prospective_score(),
            opponent_score: opponent.score(),
            winning_score: WINNING_SCORE,
        })
    }

    /// Applies one roll-or-hold decision for the active player.
    ///
    /// In timed mode the clock is checked before the first decision of each
    /// turn; once the limit has passed that decision is discarded and the game
    /// ends on banked scores. A turn already under way is never cut short.
    pub fn apply_decision(
        &mut self,
        player: PlayerId,
        decision: Decision,
    ) -> Result<StepOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player >= PLAYER_COUNT {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }

        if self.turn_opening && self.is_time_up() {
            let status = resolve_time_up(&self.players);
            info!(?status, elapsed = ?self.elapsed(), "time limit reached");
            self.finish(status);
            return Ok(StepOutcome::TimeUp { status });
        }

        self.phase = TurnPhase::Resolving(player, decision);
        self.turn_opening = false;
        debug!(player, %decision, "resolving decision");
        let outcome = match decision {
            Decision::Hold => {
                self.players[player].hold();
                self.advance_turn();
                StepOutcome::Held {
                    score: self.players[player].score(),
                }
            }
            Decision::Roll => self.roll(player),
        };
        Ok(outcome)
    }

    fn roll(&mut self, player: PlayerId) -> StepOutcome {
        let face = self.die.roll();
        self.players[player].apply_roll(face);
        let turn_total = self.players[player].turn_total();
        let scores = self.scores();
        debug!(player, face, turn_total, "rolled");

        let state = &mut self.players[player];
        let result = if state.prospective_score() >= WINNING_SCORE {
            state.commit_prospective_score();
            self.finish(GameStatus::Finished { winner: player });
            RollResult::Won
        } else if face == BUST_FACE {
            self.advance_turn();
            RollResult::Bust
        } else {
            self.phase = TurnPhase::AwaitingDecision(player);
            RollResult::Continue
        };
        StepOutcome::Rolled {
            face,
            turn_total,
            scores,
            result,
        }
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % PLAYER_COUNT;
        self.phase = TurnPhase::AwaitingDecision(self.current_player);
        self.turn_opening = true;
    }

    fn finish(&mut self, status: GameStatus) {
        if let GameStatus::Finished { winner } = status {
            info!(winner, score = self.players[winner].score(), "game won");
        }
        self.status = status;
        self.phase = TurnPhase::GameOver;
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            players,
            rolls,
            started_at,
        } = builder;
        if !rolls.iter().all(|face| is_valid_face(*face)) {
            return Err(GameError::InvalidConfiguration(
                "scripted die faces must be between 1 and 6",
            ));
        }
        if players.iter().any(|p| p.score() != 0 || p.turn_total() != 0) {
            return Err(GameError::InvalidConfiguration(
                "players must start with no points",
            ));
        }
        let die = if rolls.is_empty() {
            Die::seeded(config.seed)
        } else {
            Die::with_faces(config.seed, rolls)
        };
        Ok(Game {
            config,
            status: GameStatus::Ongoing,
            phase: TurnPhase::AwaitingDecision(0),
            current_player: 0,
            players,
            die,
            started_at: started_at.unwrap_or_else(Instant::now),
            turn_opening: true,
        })
    }
}

/// Decides a timed-out game on banked scores alone.
pub fn resolve_time_up(players: &[Player; PLAYER_COUNT]) -> GameStatus {
    let (first, second) = (players[0].score(), players[1].score());
    match first.cmp(&second) {
        std::cmp::Ordering::Greater => GameStatus::Finished { winner: 0 },
        std::cmp::Ordering::Less => GameStatus::Finished { winner: 1 },
        std::cmp::Ordering::Equal => GameStatus::Draw,
    }
}
