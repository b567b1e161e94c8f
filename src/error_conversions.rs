//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions that cross those boundaries live here.

use crate::domain::types::TypeConstraintError;
use crate::domain::validation::NotificationSource;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<RepositoryError> for NotificationSource {
    fn from(val: RepositoryError) -> Self {
        NotificationSource::Message(val.to_string())
    }
}
