use thiserror::Error;

/// Errors the harness may report for an execute call.
///
/// Execution is the only fallible boundary call; price queries and account
/// queries are trusted (see the oracle contract).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Execution rejected: {0}")]
    Rejected(String),

    #[error("Market closed")]
    MarketClosed,
}

pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
