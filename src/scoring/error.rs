use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid query: query is empty after trimming")]
    EmptyQuery,
}

pub type ScoringResult<T> = Result<T, ScoringError>;
