//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers and query options are carried as these wrappers instead of raw
//! strings so that parsing happens once, at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// The value is not one of the accepted options.
    #[error("{field} has unsupported value '{value}'")]
    UnsupportedValue { field: &'static str, value: String },
}

/// Identifier of a [`crate::domain::category::Category`].
///
/// Freshly created categories get a lowercase random UUID; identifiers coming
/// from the outside (path parameters, database rows) are accepted as-is once
/// trimmed, so `"123"` is a perfectly valid (if unknown) id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Generates a new random identifier.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string().to_lowercase())
    }

    /// Parses an externally supplied identifier, rejecting empty input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString("category id"))
        } else {
            Ok(Self(trimmed))
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Column a category listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategorySortField {
    #[default]
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl CategorySortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl Display for CategorySortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "updated_at" | "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(TypeConstraintError::UnsupportedValue {
                field: "sort",
                value: other.to_string(),
            }),
        }
    }
}

/// Ordering direction for listings.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(TypeConstraintError::UnsupportedValue {
                field: "dir",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unique_ids_are_lowercase_and_distinct() {
        let first = CategoryId::unique();
        let second = CategoryId::unique();

        assert_ne!(first, second);
        assert_eq!(first.as_str(), first.as_str().to_lowercase());
    }

    #[test]
    fn ids_compare_by_value() {
        let a = CategoryId::new("123").unwrap();
        let b = CategoryId::new(" 123 ".to_string()).unwrap();

        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(
            CategoryId::new("   "),
            Err(TypeConstraintError::EmptyString("category id"))
        );
    }

    #[test]
    fn deserialization_applies_id_rules() {
        let id: CategoryId = serde_json::from_str(r#"" 123 ""#).unwrap();
        assert_eq!(id.as_str(), "123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""123""#);

        assert!(serde_json::from_str::<CategoryId>(r#""""#).is_err());
        assert!(serde_json::from_str::<CategoryId>(r#""   ""#).is_err());
    }

    #[test]
    fn parses_sort_options() {
        assert_eq!(
            "createdAt".parse::<CategorySortField>().unwrap(),
            CategorySortField::CreatedAt
        );
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("id; drop table".parse::<CategorySortField>().is_err());
        assert!("up".parse::<SortDirection>().is_err());
    }
}
