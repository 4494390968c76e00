use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid query field '{field}': {reason}")]
    InvalidQuery { field: &'static str, reason: String },

    /// The ranker was handed an empty candidate set. Callers are expected to
    /// short-circuit with a "no match" outcome before ranking.
    #[error("Cannot rank an empty candidate set")]
    EmptyCandidateSet,

    #[error("Invalid neighbor count: {0} (must be at least 1)")]
    InvalidNeighborCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_query(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidQuery {
            field,
            reason: reason.into(),
        }
    }
}
