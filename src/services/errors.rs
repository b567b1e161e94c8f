use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::validation::{Notification, ValidationError};
use crate::repository::RepositoryError;

/// Broad classification of a [`ServiceError`], used to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Storage,
}

/// Error type returned by the category use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Raised by the domain: first violation on create, or an unknown id.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Every problem collected while updating, storage failures included.
    #[error("{0}")]
    Notification(Notification),
    /// Storage failure passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) if err.is_not_found() => ErrorKind::NotFound,
            Self::Domain(_) | Self::Notification(_) => ErrorKind::Validation,
            Self::Repository(_) => ErrorKind::Storage,
        }
    }

    /// Individual errors carried by this failure, if any.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Domain(err) => err.errors().to_vec(),
            Self::Notification(notification) => notification.errors().to_vec(),
            Self::Repository(_) => Vec::new(),
        }
    }
}

impl From<Notification> for ServiceError {
    fn from(value: Notification) -> Self {
        Self::Notification(value)
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
