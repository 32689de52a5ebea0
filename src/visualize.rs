use std::fmt::Write;

use crate::action::PlayerId;
use crate::player::Player;

pub const BANNER_WIDTH: usize = 25;

pub fn render_banner() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "*".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "The Game of Pig");
    let _ = writeln!(out);
    out
}

pub fn render_scores(players: &[Player]) -> String {
    let scores: Vec<u32> = players.iter().map(Player::score).collect();
    render_score_lines(&scores)
}

/// One `Player N score: S` line per seat, then a blank line.
pub fn render_score_lines(scores: &[u32]) -> String {
    let mut out = String::new();
    for (index, score) in scores.iter().enumerate() {
        let _ = writeln!(out, "Player {} score: {score}", index + 1);
    }
    let _ = writeln!(out);
    out
}

pub fn render_roll(player: PlayerId, face: u8, turn_total: u32, scores: &[u32]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Player {} rolling number: {face}", player + 1);
    let _ = writeln!(out, "Player {} turn total: {turn_total}", player + 1);
    out.push_str(&render_score_lines(scores));
    out
}

pub fn render_bust(player: PlayerId) -> String {
    format!("Player {}'s turn ended with 1\n", player + 1)
}

pub fn render_time_up() -> String {
    String::from("One minute has run out!!!\n")
}

pub fn render_draw(players: &[Player]) -> String {
    let mut out = String::from("It's an even game\n\n");
    out.push_str(&render_scores(players));
    out
}

pub fn render_winner(winner: PlayerId) -> String {
    format!("Player {} has won!\n", winner + 1)
}
