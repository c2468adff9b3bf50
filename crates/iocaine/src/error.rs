//! Error types for table loading and round play

/// Errors raised while building a payoff table or loading configuration.
///
/// All of these are fatal: the strategy cannot play without a valid table.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Table has no moves.
    Empty,
    /// Row `row` has `len` entries instead of one per move.
    NotSquare { row: usize, len: usize },
    /// Number of move names does not match the number of rows.
    NameCount { names: usize, rows: usize },
    /// The same move name appears twice.
    DuplicateName(String),
    /// Entry at (`row`, `col`) is NaN or infinite.
    NonFinite { row: usize, col: usize },
    /// Configuration JSON failed to parse.
    Parse(String),
    /// Configuration file could not be read.
    Io(String),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Empty => write!(f, "payoff table is empty"),
            ConfigError::NotSquare { row, len } =>
                write!(f, "payoff table row {} has {} entries, table is not square", row, len),
            ConfigError::NameCount { names, rows } =>
                write!(f, "{} move names given for {} table rows", names, rows),
            ConfigError::DuplicateName(name) =>
                write!(f, "move name {:?} appears more than once", name),
            ConfigError::NonFinite { row, col } =>
                write!(f, "payoff entry ({}, {}) is not finite", row, col),
            ConfigError::Parse(e) => write!(f, "invalid configuration: {}", e),
            ConfigError::Io(e) => write!(f, "cannot read configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A move index outside the payoff table's move set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub index: usize,
    pub count: usize,
}

impl core::fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "move {} is outside the {} known moves", self.index, self.count)
    }
}

impl std::error::Error for IllegalMoveError {}

/// Anything that can go wrong while constructing or driving a strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum IocaineError {
    Config(ConfigError),
    IllegalMove(IllegalMoveError),
    /// An opponent move was reported before we had played one ourselves.
    ObservationBeforeMove,
    /// No opponent move was reported for a round after the first.
    MissingObservation,
}

impl core::fmt::Display for IocaineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IocaineError::Config(e) => e.fmt(f),
            IocaineError::IllegalMove(e) => e.fmt(f),
            IocaineError::ObservationBeforeMove =>
                write!(f, "opponent move observed before any move was played"),
            IocaineError::MissingObservation =>
                write!(f, "opponent move missing after the first round"),
        }
    }
}

impl std::error::Error for IocaineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IocaineError::Config(e) => Some(e),
            IocaineError::IllegalMove(e) => Some(e),
            IocaineError::ObservationBeforeMove | IocaineError::MissingObservation => None,
        }
    }
}

impl From<ConfigError> for IocaineError {
    fn from(e: ConfigError) -> Self {
        IocaineError::Config(e)
    }
}

impl From<IllegalMoveError> for IocaineError {
    fn from(e: IllegalMoveError) -> Self {
        IocaineError::IllegalMove(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ConfigError::Empty.to_string(), "payoff table is empty");
        assert_eq!(
            ConfigError::NotSquare { row: 1, len: 2 }.to_string(),
            "payoff table row 1 has 2 entries, table is not square"
        );
        assert_eq!(
            IllegalMoveError { index: 7, count: 3 }.to_string(),
            "move 7 is outside the 3 known moves"
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let e: IocaineError = IllegalMoveError { index: 3, count: 3 }.into();
        assert_eq!(e, IocaineError::IllegalMove(IllegalMoveError { index: 3, count: 3 }));
        assert_eq!(e.to_string(), "move 3 is outside the 3 known moves");

        let e: IocaineError = ConfigError::Empty.into();
        assert!(std::error::Error::source(&e).is_some());
        assert!(std::error::Error::source(&IocaineError::MissingObservation).is_none());
        assert_eq!(
            IocaineError::MissingObservation.to_string(),
            "opponent move missing after the first round"
        );
    }
}
