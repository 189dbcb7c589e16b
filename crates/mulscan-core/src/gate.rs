//! Toggle gating with `do()` / `don't()` instructions.
//!
//! Text is split into [`Piece`]s: runs of ordinary text and the toggle tokens
//! between them. [`GateState`] folds pieces in order, counting matches only
//! while the gate is open. The state is a plain value, so carrying it from one
//! line to the next is what keeps a `don't()` in effect across line breaks.

use once_cell::sync::Lazy;
use regex::{Matches, Regex};
use tracing::trace;

use crate::error::ScanError;
use crate::pattern::{self, accumulate};
use crate::sink::MatchSink;

static TOGGLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"do\(\)|don't\(\)").expect("toggle pattern is valid"));

/// A toggle token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `do()`: start counting matches.
    Do,
    /// `don't()`: stop counting matches.
    Dont,
}

impl Instruction {
    /// The literal token text.
    pub fn token(self) -> &'static str {
        match self {
            Instruction::Do => "do()",
            Instruction::Dont => "don't()",
        }
    }

    /// Whether the gate is open after this instruction.
    pub fn enables(self) -> bool {
        matches!(self, Instruction::Do)
    }

    fn from_token(token: &str) -> Self {
        if token == "do()" {
            Instruction::Do
        } else {
            Instruction::Dont
        }
    }
}

/// A segment of text or a toggle token, in textual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Toggle(Instruction),
}

/// Iterator returned by [`pieces`].
pub struct Pieces<'a> {
    text: &'a str,
    pos: usize,
    tokens: Matches<'static, 'a>,
    pending: Option<Instruction>,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(instruction) = self.pending.take() {
            return Some(Piece::Toggle(instruction));
        }

        match self.tokens.next() {
            Some(token) => {
                let before = &self.text[self.pos..token.start()];
                self.pos = token.end();
                let instruction = Instruction::from_token(token.as_str());
                if before.is_empty() {
                    Some(Piece::Toggle(instruction))
                } else {
                    self.pending = Some(instruction);
                    Some(Piece::Text(before))
                }
            }
            None if self.pos < self.text.len() => {
                let rest = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Piece::Text(rest))
            }
            None => None,
        }
    }
}

/// Split `text` on toggle tokens. Empty text runs are skipped.
pub fn pieces(text: &str) -> Pieces<'_> {
    Pieces {
        text,
        pos: 0,
        tokens: TOGGLE_REGEX.find_iter(text),
        pending: None,
    }
}

/// The `(active, sum)` accumulator for gated summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    active: bool,
    sum: u128,
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

impl GateState {
    /// Open gate, zero sum.
    pub fn new() -> Self {
        Self {
            active: true,
            sum: 0,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn sum(&self) -> u128 {
        self.sum
    }

    /// Apply a single piece.
    pub fn apply<S: MatchSink>(self, piece: Piece<'_>, sink: &mut S) -> Result<Self, ScanError> {
        match piece {
            Piece::Toggle(instruction) => {
                trace!(token = instruction.token(), "Toggle");
                Ok(Self {
                    active: instruction.enables(),
                    ..self
                })
            }
            Piece::Text(_) if !self.active => Ok(self),
            Piece::Text(segment) => {
                let mut sum = self.sum;
                for mul in pattern::matches(segment) {
                    sum = accumulate(sum, &mul)?;
                    sink.record(mul.as_str())?;
                    trace!(literal = %mul, "Counted match");
                }
                Ok(Self { sum, ..self })
            }
        }
    }

    /// Fold every piece of `text` into the state.
    pub fn feed<S: MatchSink>(self, text: &str, sink: &mut S) -> Result<Self, ScanError> {
        pieces(text).try_fold(self, |state, piece| state.apply(piece, sink))
    }
}
