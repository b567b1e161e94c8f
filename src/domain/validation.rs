//! Validation framework.
//!
//! Rules live in a [`Validator`] bound to one aggregate; what happens when a
//! rule fails is decided by the [`ValidationHandler`] the caller passes in.
//! [`ThrowsValidationHandler`] aborts on the first failure while
//! [`Notification`] collects every failure of a pass.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A single validation or domain failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives the violations discovered by a [`Validator`].
///
/// Returning `Err` stops the validator at the current rule.
pub trait ValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;
}

/// Fail-fast handler: the first violation becomes a [`DomainError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::validation(error))
    }
}

/// Ordered, append-only accumulator of validation errors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification holding a single error.
    pub fn with(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Merges another notification after the errors already present.
    pub fn append_all(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Runs `f`, recording its failure instead of propagating it.
    ///
    /// Domain errors contribute their individual errors; anything else is
    /// recorded by its display message.
    pub fn validate<T, E>(&mut self, f: impl FnOnce() -> Result<T, E>) -> Option<T>
    where
        E: Into<NotificationSource>,
    {
        match f() {
            Ok(value) => Some(value),
            Err(err) => {
                match err.into() {
                    NotificationSource::Domain(domain) => {
                        self.errors.extend(domain.errors().iter().cloned());
                    }
                    NotificationSource::Message(message) => {
                        self.errors.push(ValidationError::new(message));
                    }
                }
                None
            }
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

impl From<DomainError> for Notification {
    fn from(value: DomainError) -> Self {
        Self {
            errors: value.errors().to_vec(),
        }
    }
}

/// What a failed closure handed to [`Notification::validate`] contributes.
#[derive(Debug)]
pub enum NotificationSource {
    Domain(DomainError),
    Message(String),
}

impl From<DomainError> for NotificationSource {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

/// Runs every rule for one aggregate against the bound handler.
///
/// Implementations only read the aggregate.
pub trait Validator {
    fn validate(&mut self) -> Result<(), DomainError>;
}
