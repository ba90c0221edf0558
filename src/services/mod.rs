//! Page loaders and actions sitting between routes and the resource client.
//!
//! Reads go through the data hooks and therefore never fail; only actions
//! that the user must hear about return [`ServiceError`].

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod influencers;
pub mod notifications;
pub mod outreach;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err if err.is_unauthorized() => ServiceError::Unauthorized,
            err => ServiceError::Repository(err),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Result of an outreach dispatch as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutreachOutcome {
    /// The backend accepted the batch.
    Sent(usize),
    /// The backend was unreachable or refused; the batch was not delivered.
    Simulated(usize),
}

impl OutreachOutcome {
    pub fn recipients(self) -> usize {
        match self {
            OutreachOutcome::Sent(count) | OutreachOutcome::Simulated(count) => count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_service_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::from_status(401, "expired")),
            ServiceError::Unauthorized
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Transport("refused".into())),
            ServiceError::Repository(RepositoryError::Transport(_))
        ));
    }
}
