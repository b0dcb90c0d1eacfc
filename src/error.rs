use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    #[error("Connection error: {0}")]
    Connection(#[source] SqlxError),

    #[error("Query error: {0}")]
    Query(#[source] SqlxError),

    #[error("Result metadata unavailable: {0}")]
    Result(&'static str),

    #[error("Decode error: expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Decode error: {0}")]
    Decode(#[source] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Coarse classification of a [`SessionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Query,
    Result,
    Decode,
    Config,
    Output,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Connection(_) => ErrorKind::Connection,
            SessionError::Query(_) => ErrorKind::Query,
            SessionError::Result(_) => ErrorKind::Result,
            SessionError::ColumnCount { .. } | SessionError::Decode(_) => ErrorKind::Decode,
            SessionError::Config(_) => ErrorKind::Config,
            SessionError::Output(_) => ErrorKind::Output,
        }
    }
}
