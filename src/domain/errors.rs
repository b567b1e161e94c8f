//! Domain error model.

use thiserror::Error;

use crate::domain::AggregateRoot;
use crate::domain::validation::ValidationError;

/// Failure raised by the domain layer.
///
/// Both variants carry the list of individual [`ValidationError`]s alongside
/// a display message so callers can report either form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more validation rules were violated.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },
    /// An identifier did not resolve to a stored aggregate.
    #[error("{message}")]
    NotFound {
        message: String,
        errors: Vec<ValidationError>,
    },
}

impl DomainError {
    /// Single violation; the error's message doubles as the display message.
    pub fn validation(error: ValidationError) -> Self {
        Self::Validation {
            message: error.message.clone(),
            errors: vec![error],
        }
    }

    /// Several violations without a summary message.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self::Validation {
            message: String::new(),
            errors,
        }
    }

    /// `"<Aggregate> with ID <id> was not found"`.
    pub fn not_found<A: AggregateRoot>(id: &A::Id) -> Self {
        let message = format!("{} with ID {} was not found", A::NAME, id);
        Self::NotFound {
            errors: vec![ValidationError::new(message.clone())],
            message,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::NotFound { message, .. } => message,
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } | Self::NotFound { errors, .. } => errors,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::CategoryId;

    #[test]
    fn not_found_carries_one_error_with_the_message() {
        let id = CategoryId::new("123").unwrap();
        let err = DomainError::not_found::<Category>(&id);

        assert!(err.is_not_found());
        assert_eq!(err.message(), "Category with ID 123 was not found");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message, "Category with ID 123 was not found");
        assert_eq!(err.to_string(), "Category with ID 123 was not found");
    }

    #[test]
    fn validation_from_single_error_uses_its_message() {
        let err = DomainError::validation(ValidationError::new("'name' should not be null"));

        assert_eq!(err.message(), "'name' should not be null");
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn validation_from_many_errors_has_empty_message() {
        let err = DomainError::with_errors(vec![
            ValidationError::new("first"),
            ValidationError::new("second"),
        ]);

        assert_eq!(err.message(), "");
        assert_eq!(err.errors().len(), 2);
    }
}
