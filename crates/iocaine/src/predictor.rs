//! The second- and triple-guesser
//!
//! A [`Predictor`] wraps one source of guesses about the opponent's next
//! move. It keeps score of what would have happened had we trusted the
//! guess, countered it, or countered the counter, and recommends whichever
//! rotation has paid off best over a trailing window.

use serde::{Deserialize, Serialize};
use crate::payoff::{Move, PayoffTable};
use crate::stats::Stats;

/// A recommended move together with the windowed score backing it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub mv: Move,
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predictor {
    stats: Stats,
    prediction: Option<Move>,
}

impl Predictor {
    /// A predictor over `moves` possible moves, with no prediction yet
    pub fn new(moves: usize) -> Self {
        Self { stats: Stats::new(moves), prediction: None }
    }

    pub fn prediction(&self) -> Option<Move> {
        self.prediction
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Score the previous prediction against `observed`, then remember `guess`.
    ///
    /// The observed move is expressed as an offset from what was predicted;
    /// the rotation that would have beaten it gains a point and the one that
    /// would have lost to it drops one.
    pub fn addguess(&mut self, observed: Option<Move>, guess: Move, table: &PayoffTable) {
        if let (Some(observed), Some(prediction)) = (observed, self.prediction) {
            let diff = table.offset(observed, prediction);
            self.stats.add(table.beats(diff).index(), 1);
            self.stats.add(table.loses_to(diff).index(), -1);
            self.stats.advance();
        }
        self.prediction = Some(guess);
    }

    /// Return our best rotation of the current prediction if it scored
    /// strictly better than `best` over the window, else `best`.
    ///
    /// [`addguess`](Self::addguess) advances right after scoring, so the open
    /// snapshot never holds a round of its own: a window of `age` covers the
    /// last `age - 1` scored rounds, and `age` 1 always scores zero.
    pub fn bestguess(&self, age: usize, best: Option<Guess>, table: &PayoffTable) -> Option<Guess> {
        let Some(prediction) = self.prediction else {
            return best;
        };
        let (default, score) = match best {
            Some(guess) => (table.offset(guess.mv, prediction).index(), guess.score),
            None => (0, -1),
        };
        let (rotation, score) = self.stats.max(age, default, score);
        Some(Guess { mv: table.rotate(Move(rotation), prediction), score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCK: Move = Move(0);
    const PAPER: Move = Move(1);
    const SCISSORS: Move = Move(2);

    #[test]
    fn test_first_guess_only_seeds() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        p.addguess(None, ROCK, &t);
        assert_eq!(p.prediction(), Some(ROCK));
        assert_eq!(p.stats().rounds(), 1);
    }

    #[test]
    fn test_no_prediction_passes_best_through() {
        let t = PayoffTable::classic();
        let p = Predictor::new(3);
        assert_eq!(p.bestguess(10, None, &t), None);
        let best = Some(Guess { mv: PAPER, score: 4 });
        assert_eq!(p.bestguess(10, best, &t), best);
    }

    #[test]
    fn test_accurate_source_learns_to_counter() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        // predicts rock every time, and the opponent plays rock every time
        p.addguess(None, ROCK, &t);
        for _ in 0..5 {
            p.addguess(Some(ROCK), ROCK, &t);
        }
        // offset 0 observed: rotation beats(0) = 1 gains, loses_to(0) = 2 drops
        assert_eq!(p.stats().current(), &[0, 5, -5]);
        assert_eq!(p.bestguess(100, None, &t), Some(Guess { mv: PAPER, score: 5 }));
    }

    #[test]
    fn test_wrong_source_is_second_guessed() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        // predicts rock, the opponent always plays paper
        p.addguess(None, ROCK, &t);
        for _ in 0..4 {
            p.addguess(Some(PAPER), ROCK, &t);
        }
        // offset 1: beats(1) = 2 gains
        assert_eq!(p.bestguess(100, None, &t), Some(Guess { mv: SCISSORS, score: 4 }));
    }

    #[test]
    fn test_weaker_stats_keep_incoming_best() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        p.addguess(None, ROCK, &t);
        p.addguess(Some(ROCK), ROCK, &t);
        let best = Some(Guess { mv: SCISSORS, score: 1 });
        // our top score is 1, not strictly above, so the incoming best stays
        assert_eq!(p.bestguess(100, best, &t), best);
    }

    #[test]
    fn test_window_limits_memory() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        p.addguess(None, ROCK, &t);
        for _ in 0..5 {
            p.addguess(Some(ROCK), ROCK, &t);
        }
        p.addguess(Some(PAPER), ROCK, &t);
        // the open snapshot is a copy of the last scored round, so age 1
        // sees nothing and age 2 sees only the last round
        assert_eq!(p.bestguess(1, None, &t), Some(Guess { mv: ROCK, score: 0 }));
        assert_eq!(p.bestguess(2, None, &t), Some(Guess { mv: SCISSORS, score: 1 }));
        assert_eq!(p.bestguess(100, None, &t), Some(Guess { mv: PAPER, score: 5 }));
    }

    #[test]
    fn test_bestguess_is_idempotent() {
        let t = PayoffTable::classic();
        let mut p = Predictor::new(3);
        p.addguess(None, PAPER, &t);
        p.addguess(Some(SCISSORS), ROCK, &t);
        let before = p.clone();
        let a = p.bestguess(5, Some(Guess { mv: ROCK, score: 0 }), &t);
        let b = p.bestguess(5, Some(Guess { mv: ROCK, score: 0 }), &t);
        assert_eq!(a, b);
        assert_eq!(p, before);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let t = PayoffTable::classic();
        let rounds = [(None, ROCK), (Some(PAPER), SCISSORS), (Some(SCISSORS), SCISSORS), (Some(ROCK), PAPER)];
        let mut a = Predictor::new(3);
        let mut b = Predictor::new(3);
        for (observed, guess) in rounds {
            a.addguess(observed, guess, &t);
            b.addguess(observed, guess, &t);
        }
        assert_eq!(a, b);
        assert_eq!(a.stats().rounds(), 4);
    }
}
