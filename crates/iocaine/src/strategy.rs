//! What a game harness needs from a strategy

use serde::{Deserialize, Serialize};
use crate::error::IocaineError;
use crate::payoff::{Move, PayoffTable};

/// Outcome of a single round, from the strategy's point of view
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub own: Move,
    pub opponent: Move,
    pub score: f64,
}

impl RoundResult {
    /// Score a round against the table
    pub fn scored(table: &PayoffTable, own: Move, opponent: Move) -> Self {
        Self { own, opponent, score: table.score(own, opponent) }
    }
}

/// A player in a repeated game
pub trait Strategy {
    /// Choose the next move, given the opponent's previous one.
    ///
    /// `observed` is `None` on the first round of a game.
    fn next_move(&mut self, observed: Option<Move>) -> Result<Move, IocaineError>;

    /// Called once when the game is over
    fn finish(&mut self, _results: &[RoundResult]) {}
}
