use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::AggregateRoot;
use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Mutable columns of [`Category`]; `None` writes `NULL`.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChangeset {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self::with(
            CategoryId::new(category.id)?,
            Some(category.name),
            category.description,
            category.active,
            category.created_at,
            category.updated_at,
            category.deleted_at,
        ))
    }
}

impl TryFrom<&DomainCategory> for Category {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = category
            .name()
            .ok_or(TypeConstraintError::EmptyString("name"))?;
        Ok(Self {
            id: category.id().as_str().to_string(),
            name: name.to_string(),
            description: category.description().map(str::to_string),
            active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        })
    }
}

impl TryFrom<&DomainCategory> for CategoryChangeset {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let row = Category::try_from(category)?;
        Ok(Self {
            name: row.name,
            description: row.description,
            active: row.active,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}
