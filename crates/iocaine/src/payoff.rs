//! Payoff table and the move algebra derived from it
//!
//! Moves are plain indices into the table. Which move "beats" another is
//! never hard-coded: it is read off the table row each time it is asked for.

use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, IllegalMoveError};

/// A move, identified by its row in the payoff table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(pub usize);

impl Move {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Square payoff table over N moves.
///
/// `score(a, b)` is the outcome for a player choosing `a` against an
/// opponent choosing `b`. Positive is good for `a`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable", into = "RawTable")]
pub struct PayoffTable {
    names: Vec<String>,
    scores: Vec<Vec<f64>>,
}

/// Wire form of the table, validated on the way in
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawTable {
    moves: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl TryFrom<RawTable> for PayoffTable {
    type Error = ConfigError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        PayoffTable::new(raw.moves, raw.scores)
    }
}

impl From<PayoffTable> for RawTable {
    fn from(table: PayoffTable) -> Self {
        RawTable { moves: table.names, scores: table.scores }
    }
}

impl PayoffTable {
    /// Build a table from move names and score rows.
    ///
    /// Fails if the table is empty, not square, has a name count that
    /// differs from the row count, repeats a name, or holds a non-finite entry.
    pub fn new(names: Vec<String>, scores: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        if scores.is_empty() {
            return Err(ConfigError::Empty);
        }
        if names.len() != scores.len() {
            return Err(ConfigError::NameCount { names: names.len(), rows: scores.len() });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        let n = scores.len();
        for (row, entries) in scores.iter().enumerate() {
            if entries.len() != n {
                return Err(ConfigError::NotSquare { row, len: entries.len() });
            }
            if let Some(col) = entries.iter().position(|s| !s.is_finite()) {
                return Err(ConfigError::NonFinite { row, col });
            }
        }
        Ok(Self { names, scores })
    }

    /// Standard rock-paper-scissors: win 1, tie 0, loss -1
    pub fn classic() -> Self {
        Self {
            names: vec!["rock".to_string(), "paper".to_string(), "scissors".to_string()],
            scores: vec![
                vec![0.0, -1.0, 1.0],
                vec![1.0, 0.0, -1.0],
                vec![-1.0, 1.0, 0.0],
            ],
        }
    }

    /// Number of distinct moves
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> {
        (0..self.len()).map(Move)
    }

    pub fn name(&self, mv: Move) -> Option<&str> {
        self.names.get(mv.0).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<Move> {
        self.names.iter().position(|n| n == name).map(Move)
    }

    /// Reject moves outside the table
    pub fn check(&self, mv: Move) -> Result<Move, IllegalMoveError> {
        if mv.0 < self.len() {
            Ok(mv)
        } else {
            Err(IllegalMoveError { index: mv.0, count: self.len() })
        }
    }

    /// Outcome for `a` when played against `b`
    ///
    /// # Panics
    /// If either move is outside the table; see [`check`](Self::check).
    pub fn score(&self, a: Move, b: Move) -> f64 {
        self.scores[a.0][b.0]
    }

    /// The move that exploits `mv`: lowest entry in its row.
    /// Ties go to the lowest index.
    ///
    /// # Panics
    /// If `mv` is outside the table.
    pub fn beats(&self, mv: Move) -> Move {
        let row = &self.scores[mv.0];
        let mut best = 0;
        for (i, s) in row.iter().enumerate() {
            if *s < row[best] {
                best = i;
            }
        }
        Move(best)
    }

    /// The move most exposed to `mv`: highest entry in its row.
    /// Ties go to the lowest index.
    ///
    /// # Panics
    /// If `mv` is outside the table.
    pub fn loses_to(&self, mv: Move) -> Move {
        let row = &self.scores[mv.0];
        let mut worst = 0;
        for (i, s) in row.iter().enumerate() {
            if *s > row[worst] {
                worst = i;
            }
        }
        Move(worst)
    }

    /// Rotational offset of `observed` relative to `predicted`, mod N
    pub fn offset(&self, observed: Move, predicted: Move) -> Move {
        let n = self.len();
        Move((observed.0 % n + n - predicted.0 % n) % n)
    }

    /// Inverse of [`offset`](Self::offset): shift `offset` forward by `base`
    pub fn rotate(&self, offset: Move, base: Move) -> Move {
        Move((offset.0 + base.0) % self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCK: Move = Move(0);
    const PAPER: Move = Move(1);
    const SCISSORS: Move = Move(2);

    #[test]
    fn test_classic_relations() {
        let t = PayoffTable::classic();
        assert_eq!(t.beats(ROCK), PAPER);
        assert_eq!(t.beats(PAPER), SCISSORS);
        assert_eq!(t.beats(SCISSORS), ROCK);
        assert_eq!(t.loses_to(ROCK), SCISSORS);
        assert_eq!(t.loses_to(PAPER), ROCK);
        assert_eq!(t.loses_to(SCISSORS), PAPER);
    }

    #[test]
    fn test_classic_scores() {
        let t = PayoffTable::classic();
        assert_eq!(t.score(ROCK, SCISSORS), 1.0);
        assert_eq!(t.score(ROCK, PAPER), -1.0);
        assert_eq!(t.score(PAPER, PAPER), 0.0);
    }

    #[test]
    fn test_offset_and_rotate() {
        let t = PayoffTable::classic();
        assert_eq!(t.offset(ROCK, PAPER), SCISSORS);
        assert_eq!(t.offset(SCISSORS, ROCK), SCISSORS);
        assert_eq!(t.offset(PAPER, PAPER), ROCK);
        for a in t.moves() {
            for b in t.moves() {
                assert_eq!(t.rotate(t.offset(a, b), b), a);
            }
        }
    }

    #[test]
    fn test_names() {
        let t = PayoffTable::classic();
        assert_eq!(t.name(PAPER), Some("paper"));
        assert_eq!(t.index_of("scissors"), Some(SCISSORS));
        assert_eq!(t.index_of("lizard"), None);
        assert_eq!(t.name(Move(3)), None);
    }

    #[test]
    fn test_check() {
        let t = PayoffTable::classic();
        assert_eq!(t.check(SCISSORS), Ok(SCISSORS));
        assert_eq!(t.check(Move(3)), Err(IllegalMoveError { index: 3, count: 3 }));
    }

    #[test]
    #[should_panic]
    fn test_unchecked_move_panics() {
        PayoffTable::classic().beats(Move(3));
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        let t = PayoffTable::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![0.0, 0.0, 0.0], vec![1.0, -1.0, -1.0], vec![2.0, 2.0, 0.0]],
        ).unwrap();
        assert_eq!(t.beats(Move(0)), Move(0));
        assert_eq!(t.loses_to(Move(0)), Move(0));
        assert_eq!(t.beats(Move(1)), Move(1));
        assert_eq!(t.loses_to(Move(2)), Move(0));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(PayoffTable::new(vec![], vec![]), Err(ConfigError::Empty));
        assert_eq!(
            PayoffTable::new(vec!["a".into(), "b".into()], vec![vec![0.0, 1.0], vec![0.0]]),
            Err(ConfigError::NotSquare { row: 1, len: 1 })
        );
        assert_eq!(
            PayoffTable::new(vec!["a".into()], vec![vec![0.0, 1.0], vec![1.0, 0.0]]),
            Err(ConfigError::NameCount { names: 1, rows: 2 })
        );
        assert_eq!(
            PayoffTable::new(vec!["a".into(), "a".into()], vec![vec![0.0, 1.0], vec![1.0, 0.0]]),
            Err(ConfigError::DuplicateName("a".into()))
        );
        assert_eq!(
            PayoffTable::new(vec!["a".into()], vec![vec![f64::NAN]]),
            Err(ConfigError::NonFinite { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let json = r#"{"moves":["rock","paper","scissors"],"scores":[[0,-1,1],[1,0,-1],[-1,1,0]]}"#;
        let t: PayoffTable = serde_json::from_str(json).unwrap();
        assert_eq!(t, PayoffTable::classic());

        let bad = r#"{"moves":["rock","paper"],"scores":[[0,-1],[1]]}"#;
        assert!(serde_json::from_str::<PayoffTable>(bad).is_err());
    }

    #[test]
    fn test_five_move_table() {
        // rock-paper-scissors-lizard-spock laid out so i beats i-1 and i-3 (mod 5)
        let n = 5;
        let scores = (0..n)
            .map(|a| {
                (0..n)
                    .map(|b| match (a + n - b) % n {
                        0 => 0.0,
                        1 | 3 => 1.0,
                        _ => -1.0,
                    })
                    .collect()
            })
            .collect();
        let names = (0..n).map(|i| format!("m{}", i)).collect();
        let t = PayoffTable::new(names, scores).unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.beats(Move(0)), Move(1));
        assert_eq!(t.loses_to(Move(0)), Move(2));
    }
}
