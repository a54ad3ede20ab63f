use ant_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match ant count {expected}")]
    AntCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("routing error: {0}")]
    Route(#[from] RouteError),

    #[error("routing deadlock: colony not delivered within {limit} steps")]
    Deadlock { limit: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
