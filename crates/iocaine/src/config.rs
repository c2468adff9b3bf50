//! Strategy configuration
//!
//! ```json
//! {
//!   "payoff": {
//!     "moves": ["rock", "paper", "scissors"],
//!     "scores": [[0, -1, 1], [1, 0, -1], [-1, 1, 0]]
//!   },
//!   "seed": [0, 0, ...],
//!   "game_index": 0
//! }
//! ```
//!
//! Every field is optional; missing ones fall back to [`IocaineConfig::default`].

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::payoff::PayoffTable;
use crate::random::SeededRng;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IocaineConfig {
    /// Move set and outcomes
    pub payoff: PayoffTable,
    /// Randomness seed
    pub seed: [u8; 32],
    /// Mixed into the seed so consecutive games differ
    pub game_index: u32,
}

impl Default for IocaineConfig {
    fn default() -> Self {
        Self {
            payoff: PayoffTable::classic(),
            seed: [0u8; 32],
            game_index: 0,
        }
    }
}

impl IocaineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn rng(&self) -> SeededRng {
        SeededRng::new(&self.seed, self.game_index)
    }
}
