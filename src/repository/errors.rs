use thiserror::Error;

const MAX_BODY_CHARS: usize = 200;

/// Failure of a single backend call.
///
/// Transport failures, non-success statuses and undecodable bodies all end up
/// here; the data hooks collapse every variant into one "fetch failed" state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Classifies a non-success HTTP status, keeping a bounded excerpt of the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => RepositoryError::NotFound,
            _ => RepositoryError::Status {
                status,
                body: truncate_body(body),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            RepositoryError::Status {
                status: 401 | 403,
                ..
            }
        )
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_CHARS {
        return trimmed.to_string();
    }
    let mut excerpt: String = trimmed.chars().take(MAX_BODY_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        RepositoryError::Unexpected(format!("CSV export failed: {err}"))
    }
}
