use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, sortkit_engine::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Errors reported by the checked entry points of the engine.
///
/// The sorts themselves cannot fail. Only precondition checks produce errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raised when an order statistic is requested for a rank outside `0..len`.
    RankOutOfRange { rank: usize, len: usize },
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::RankOutOfRange { rank, len } if *len == 0 => {
                write!(f, "rank {rank} is out of range: the sequence is empty")
            }
            Error::RankOutOfRange { rank, len } => {
                write!(f, "rank {rank} is out of range: expected a rank below {len}")
            }
        }
    }
}
