//! Iocaine Powder
//!
//! Fifty base predictors guess the opponent's next move: 36 recall the most
//! similar moment in history (6 windows x 2 mimic modes x 3 watched
//! histories), 12 expect the most frequent recent move (6 windows x 2
//! players), one always says the first move and one guesses at random.
//! Each is second-guessed by its own [`Predictor`]. For every window the
//! best-scoring of the 50 feeds a meta-predictor, and the six meta-predictors
//! are scored against each other over the whole game to pick the move.

use log::{debug, info, trace, warn};
use crate::error::IocaineError;
use crate::payoff::{Move, PayoffTable};
use crate::predictor::{Guess, Predictor};
use crate::random::{RandomSource, SeededRng};
use crate::recall::recall;
use crate::stats::Stats;
use crate::strategy::{RoundResult, Strategy};
use crate::IocaineConfig;

/// Scoring windows, longest first
pub const AGES: [usize; 6] = [1000, 100, 10, 5, 2, 1];

/// Mimic my own past move, or theirs
const MIMICS: usize = 2;
/// Match on my history, their history, or both
const WATCHES: usize = 3;

/// Number of base predictors scored each round
pub const BASE_PREDICTORS: usize = AGES.len() * MIMICS * WATCHES + AGES.len() * MIMICS + 2;

/// Moves played so far in the current game
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    mine: Vec<Move>,
    theirs: Vec<Move>,
    pairs: Vec<(Move, Move)>,
}

impl History {
    pub fn mine(&self) -> &[Move] {
        &self.mine
    }

    pub fn theirs(&self) -> &[Move] {
        &self.theirs
    }

    pub fn pairs(&self) -> &[(Move, Move)] {
        &self.pairs
    }

    fn mimic(&self, mimic: usize) -> &[Move] {
        if mimic == 0 {
            &self.mine
        } else {
            &self.theirs
        }
    }
}

/// The Iocaine Powder strategy
#[derive(Clone, Debug)]
pub struct Iocaine<R = SeededRng> {
    table: PayoffTable,
    rng: R,
    log: History,
    /// Move counts: [0] mine, [1] theirs
    counts: [Stats; MIMICS],
    history: [[[Predictor; WATCHES]; MIMICS]; AGES.len()],
    frequency: [[Predictor; MIMICS]; AGES.len()],
    fixed: Predictor,
    random: Predictor,
    meta: [Predictor; AGES.len()],
}

impl Iocaine<SeededRng> {
    pub fn new(config: &IocaineConfig) -> Self {
        Self::with_rng(config.payoff.clone(), config.rng())
    }

    /// Build from a JSON configuration (see [`IocaineConfig`])
    pub fn from_json(json: &str) -> Result<Self, IocaineError> {
        Ok(Self::new(&IocaineConfig::from_json(json)?))
    }

    /// Build from a JSON configuration file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, IocaineError> {
        Ok(Self::new(&IocaineConfig::from_file(path)?))
    }
}

impl<R: RandomSource> Iocaine<R> {
    /// Build a fresh strategy drawing randomness from `rng`
    pub fn with_rng(table: PayoffTable, rng: R) -> Self {
        let n = table.len();
        Self {
            table,
            rng,
            log: History::default(),
            counts: std::array::from_fn(|_| Stats::new(n)),
            history: std::array::from_fn(|_| {
                std::array::from_fn(|_| std::array::from_fn(|_| Predictor::new(n)))
            }),
            frequency: std::array::from_fn(|_| std::array::from_fn(|_| Predictor::new(n))),
            fixed: Predictor::new(n),
            random: Predictor::new(n),
            meta: std::array::from_fn(|_| Predictor::new(n)),
        }
    }

    pub fn table(&self) -> &PayoffTable {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.log
    }

    /// Rounds played in the current game
    pub fn rounds(&self) -> usize {
        self.log.mine.len()
    }

    pub fn move_name(&self, mv: Move) -> Option<&str> {
        self.table.name(mv)
    }

    /// Forget the current game. The table and random source carry over.
    pub fn reset(&mut self) {
        let n = self.table.len();
        self.log = History::default();
        self.counts = std::array::from_fn(|_| Stats::new(n));
        self.history = std::array::from_fn(|_| {
            std::array::from_fn(|_| std::array::from_fn(|_| Predictor::new(n)))
        });
        self.frequency = std::array::from_fn(|_| std::array::from_fn(|_| Predictor::new(n)));
        self.fixed = Predictor::new(n);
        self.random = Predictor::new(n);
        self.meta = std::array::from_fn(|_| Predictor::new(n));
    }

    /// All base predictors in scoring order
    fn base_predictors(&self) -> impl Iterator<Item = &Predictor> {
        self.history
            .iter()
            .flatten()
            .flatten()
            .chain(self.frequency.iter().flatten())
            .chain(std::iter::once(&self.fixed))
            .chain(std::iter::once(&self.random))
    }

    /// Play one round.
    ///
    /// `observed` is the opponent's previous move: `None` on the first round
    /// of a game and `Some` on every round after it.
    pub fn play(&mut self, observed: Option<Move>) -> Result<Move, IocaineError> {
        let observed = match observed {
            Some(mv) => Some(self.table.check(mv).map_err(|e| {
                warn!("rejecting opponent move: {}", e);
                e
            })?),
            None => None,
        };

        match (observed, self.log.mine.last()) {
            (None, None) => {}
            (Some(them), None) => {
                warn!("opponent move {:?} reported before our first move", them);
                return Err(IocaineError::ObservationBeforeMove);
            }
            (None, Some(_)) => {
                warn!("no opponent move reported for round {}", self.log.mine.len());
                return Err(IocaineError::MissingObservation);
            }
            (Some(them), Some(&mine)) => {
                self.log.theirs.push(them);
                self.log.pairs.push((mine, them));
                // open a snapshot for this round, so a window of `age` covers
                // exactly the last `age` observed rounds
                for counts in &mut self.counts {
                    counts.advance();
                }
                self.counts[0].add(mine.index(), 1);
                self.counts[1].add(them.index(), 1);
            }
        }

        let rand = Move(self.rng.next_below(self.table.len()));
        self.random.addguess(observed, rand, &self.table);
        self.fixed.addguess(observed, Move(0), &self.table);

        // the three histories are the same length, so a recalled index is
        // valid in each of them
        for (a, &age) in AGES.iter().enumerate() {
            let when = [
                recall(age, &self.log.mine),
                recall(age, &self.log.theirs),
                recall(age, &self.log.pairs),
            ];
            for mimic in 0..MIMICS {
                let source = self.log.mimic(mimic);
                for (watch, &at) in when.iter().enumerate() {
                    // no similar moment: play at random
                    let guess = if at == 0 { rand } else { source[at] };
                    self.history[a][mimic][watch].addguess(observed, guess, &self.table);
                }
                let (most, _) = self.counts[mimic].max(age, rand.index(), -1);
                self.frequency[a][mimic].addguess(observed, Move(most), &self.table);
            }
        }

        let champions: [Option<Guess>; AGES.len()] = std::array::from_fn(|a| {
            self.base_predictors()
                .fold(None, |best, p| p.bestguess(AGES[a], best, &self.table))
        });
        for (a, champion) in champions.iter().enumerate() {
            trace!("window {}: champion {:?}", AGES[a], champion);
            let guess = champion.map_or(rand, |g| g.mv);
            self.meta[a].addguess(observed, guess, &self.table);
        }

        let horizon = self.log.mine.len();
        let best = self
            .meta
            .iter()
            .fold(None, |best, p| p.bestguess(horizon, best, &self.table));
        let choice = best.map_or(rand, |g| g.mv);

        debug!(
            "round {}: opponent {:?}, playing {:?} (score {})",
            horizon,
            observed,
            choice,
            best.map_or(0, |g| g.score)
        );

        self.log.mine.push(choice);
        Ok(choice)
    }
}

impl<R: RandomSource> Strategy for Iocaine<R> {
    fn next_move(&mut self, observed: Option<Move>) -> Result<Move, IocaineError> {
        self.play(observed)
    }

    fn finish(&mut self, results: &[RoundResult]) {
        let wins = results.iter().filter(|r| r.score > 0.0).count();
        let losses = results.iter().filter(|r| r.score < 0.0).count();
        let total: f64 = results.iter().map(|r| r.score).sum();
        info!(
            "game over after {} rounds: {} won, {} lost, {} tied, total {}",
            results.len(),
            wins,
            losses,
            results.len() - wins - losses,
            total
        );
        self.reset();
    }
}
