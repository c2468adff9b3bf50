//! Iocaine Powder
//!
//! Adaptive strategy for repeated rock-paper-scissors style games, after
//! Dan Egnor's entry to the first RoShamBo programming competition.
//! The move set and who beats whom come from a payoff table, so any
//! cyclic game with N moves works.
//!
//! ```
//! use iocaine::{Iocaine, IocaineConfig, Move};
//!
//! let mut bot = Iocaine::new(&IocaineConfig::default());
//! let mut observed = None;
//! for _ in 0..10 {
//!     let mine = bot.play(observed).unwrap();
//!     assert!(mine.index() < 3);
//!     observed = Some(Move(0)); // opponent always plays rock
//! }
//! ```
//!
//! This crate is compiled to:
//! - Native (for game harnesses)
//! - WASM (for in-browser play, `wasm` feature)

mod config;
mod error;
mod iocaine;
mod payoff;
mod predictor;
mod random;
mod recall;
mod stats;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::IocaineConfig;
pub use error::{ConfigError, IllegalMoveError, IocaineError};
pub use iocaine::{History, Iocaine, AGES, BASE_PREDICTORS};
pub use payoff::{Move, PayoffTable};
pub use predictor::{Guess, Predictor};
pub use random::{RandomSource, SeededRng};
pub use recall::recall;
pub use stats::Stats;
pub use strategy::{RoundResult, Strategy};
