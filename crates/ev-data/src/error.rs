use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no {kind} matches {query:?}")]
    NotFound { kind: &'static str, query: String },

    #[error("{count} {kind}s match {query:?}; narrow the search")]
    Ambiguous {
        kind:  &'static str,
        query: String,
        count: usize,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
