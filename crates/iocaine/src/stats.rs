//! Running per-candidate score counters
//!
//! Keeps one cumulative snapshot per round so the total over any trailing
//! window is a single subtraction.

/// Cumulative scores for a fixed set of candidates, snapshotted per round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    sum: Vec<Vec<i64>>,
}

impl Stats {
    /// Start with one all-zero snapshot over `candidates` slots
    pub fn new(candidates: usize) -> Self {
        Self { sum: vec![vec![0; candidates]] }
    }

    /// Add `delta` to `candidate` in the current round
    pub fn add(&mut self, candidate: usize, delta: i64) {
        if let Some(current) = self.sum.last_mut() {
            current[candidate] += delta;
        }
    }

    /// Close the current round and open the next from a copy of it
    pub fn advance(&mut self) {
        let current = self.current().to_vec();
        self.sum.push(current);
    }

    /// Number of snapshots, including the open one
    pub fn rounds(&self) -> usize {
        self.sum.len()
    }

    /// The open snapshot
    pub fn current(&self) -> &[i64] {
        self.sum.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Best candidate over the last `age` snapshots.
    ///
    /// The window is the open snapshot minus the one `age` steps before it,
    /// so it covers whatever was added since then. Callers that add and then
    /// advance see `age - 1` rounds; callers that advance and then add see
    /// `age`. When `age` reaches back past the first snapshot the whole
    /// history counts.
    ///
    /// Returns the lowest-index candidate with the largest gain, but only if
    /// that gain is strictly above `score`; otherwise `(default, score)`.
    pub fn max(&self, age: usize, default: usize, score: i64) -> (usize, i64) {
        let current = self.current();
        let diff: Vec<i64> = if age >= self.sum.len() {
            current.to_vec()
        } else {
            let then = &self.sum[self.sum.len() - 1 - age];
            current.iter().zip(then).map(|(now, then)| now - then).collect()
        };

        let mut best: Option<(usize, i64)> = None;
        for (candidate, gain) in diff.into_iter().enumerate() {
            if best.map_or(true, |(_, top)| gain > top) {
                best = Some((candidate, gain));
            }
        }

        match best {
            Some((candidate, gain)) if gain > score => (candidate, gain),
            _ => (default, score),
        }
    }
}
