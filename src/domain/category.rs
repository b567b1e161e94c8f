use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::category_validator::CategoryValidator;
use crate::domain::errors::DomainError;
use crate::domain::types::CategoryId;
use crate::domain::validation::{ValidationHandler, Validator};
use crate::domain::{self, AggregateRoot};

/// Category aggregate root.
///
/// `deleted_at` is set exactly when the category is inactive, `updated_at`
/// moves forward on every mutation, and `id`/`created_at` never change.
/// Construction does not validate; call [`Category::validate`] with the
/// handler that fits the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Builds a brand new category with a fresh id and timestamps.
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = domain::now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    /// Rehydrates a category from stored state.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(&mut self) -> &mut Self {
        self.touch();
        self.deleted_at = None;
        self.is_active = true;
        self
    }

    /// Marks the category inactive. An existing `deleted_at` is kept.
    pub fn deactivate(&mut self) -> &mut Self {
        self.touch();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(self.updated_at);
        }
        self.is_active = false;
        self
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.touch();
        self
    }

    /// Runs the category rules, routing violations through `handler`.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    // Strictly advances `updated_at`, even when the clock has not moved.
    fn touch(&mut self) {
        let now = domain::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
