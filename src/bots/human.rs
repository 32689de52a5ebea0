use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::action::Decision;
use crate::bot::Bot;
use crate::error::GameError;
use crate::state::TurnView;

/// Line-oriented input a [`HumanBot`] reads decisions from.
pub trait LineInput {
    /// Appends one line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Stdin locks per call, so both seats of a human-vs-human game can share it.
impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Interactive bot that queries a human on a console.
///
/// Blocks until a line reading exactly `r` or `h` arrives (only the line
/// terminator is stripped); anything else is dropped and the prompt is shown again.
pub struct HumanBot<R, W> {
    input: R,
    output: W,
}

impl HumanBot<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanBot<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineInput, W: Write> Bot for HumanBot<R, W> {
    fn decide(&mut self, view: &TurnView) -> Result<Decision, GameError> {
        loop {
            write!(self.output, "Player {} Roll or HOLD: ", view.self_player + 1)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match line.trim_end_matches(['\r', '\n']).parse::<Decision>() {
                Ok(decision) => return Ok(decision),
                Err(err) => debug!(player = view.self_player, %err, "rejected console input"),
            }
        }
    }
}
