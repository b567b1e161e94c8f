use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::types::{
    CategoryId, CategorySortField, SortDirection, TypeConstraintError,
};
use crate::dto::categories::{CreateCategoryCommand, UpdateCategoryCommand};
use crate::repository::CategorySearchQuery;

pub const MAX_ITEMS_PER_PAGE: usize = 100;
pub const MAX_PAGE: usize = 1_000_000;

/// JSON body of `POST /categories`.
///
/// Name rules are enforced by the domain validator, so a missing name is
/// accepted here and reported by the use case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateCategoryRequest> for CreateCategoryCommand {
    fn from(value: CreateCategoryRequest) -> Self {
        CreateCategoryCommand::with(
            value.name,
            value.description,
            value.is_active.unwrap_or(true),
        )
    }
}

/// JSON body of `PUT /categories/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    pub fn into_command(self, id: CategoryId) -> UpdateCategoryCommand {
        UpdateCategoryCommand::with(
            id,
            self.name,
            self.description,
            self.is_active.unwrap_or(true),
        )
    }
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Query string of `GET /categories`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListCategoriesParams {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub search: String,
    #[serde(default)]
    #[validate(range(max = 1_000_000))]
    pub page: usize,
    #[serde(default = "default_per_page", rename = "perPage", alias = "per_page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: usize,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl Default for ListCategoriesParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 0,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            sort: None,
            dir: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ListCategoriesParamsError {
    #[error("List categories parameters validation failed: {0}")]
    Validation(String),
    #[error("List categories parameters contain invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ListCategoriesParamsError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ListCategoriesParamsError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ListCategoriesParams> for CategorySearchQuery {
    type Error = ListCategoriesParamsError;

    fn try_from(value: ListCategoriesParams) -> Result<Self, Self::Error> {
        value.validate()?;

        let sort = match value.sort.as_deref() {
            Some(sort) if !sort.trim().is_empty() => sort.parse()?,
            _ => CategorySortField::default(),
        };
        let direction = match value.dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => dir.parse()?,
            _ => SortDirection::default(),
        };

        Ok(CategorySearchQuery::default()
            .paginate(value.page, value.per_page)
            .terms(value.search)
            .sort(sort, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_to_active() {
        let request: CreateCategoryRequest =
            serde_json::from_str(r#"{"name":"Movies","description":null}"#).unwrap();

        let command = CreateCategoryCommand::from(request);
        assert_eq!(command.name.as_deref(), Some("Movies"));
        assert!(command.description.is_none());
        assert!(command.is_active);
    }

    #[test]
    fn create_request_reads_snake_case_flag() {
        let request: CreateCategoryRequest =
            serde_json::from_str(r#"{"name":"Movies","is_active":false}"#).unwrap();

        assert!(!CreateCategoryCommand::from(request).is_active);
    }

    #[test]
    fn update_request_keeps_missing_name() {
        let request = UpdateCategoryRequest {
            name: None,
            description: Some("desc".to_string()),
            is_active: Some(false),
        };
        let id = CategoryId::new("123").unwrap();

        let command = request.into_command(id.clone());
        assert_eq!(command.id, id);
        assert!(command.name.is_none());
        assert!(!command.is_active);
    }

    #[test]
    fn list_params_default_to_first_page_by_name() {
        let query = CategorySearchQuery::try_from(ListCategoriesParams::default()).unwrap();

        assert_eq!(query, CategorySearchQuery::default());
        assert_eq!(query.per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(query.sort, CategorySortField::Name);
        assert_eq!(query.direction, SortDirection::Asc);
    }

    #[test]
    fn list_params_parse_sort_and_direction() {
        let params = ListCategoriesParams {
            search: "doc".to_string(),
            page: 2,
            per_page: 5,
            sort: Some("createdAt".to_string()),
            dir: Some("desc".to_string()),
        };

        let query = CategorySearchQuery::try_from(params).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 5);
        assert_eq!(query.terms, "doc");
        assert_eq!(query.sort, CategorySortField::CreatedAt);
        assert_eq!(query.direction, SortDirection::Desc);
    }

    #[test]
    fn list_params_reject_bad_values() {
        let zero_per_page = ListCategoriesParams {
            per_page: 0,
            ..Default::default()
        };
        let too_many = ListCategoriesParams {
            per_page: MAX_ITEMS_PER_PAGE + 1,
            ..Default::default()
        };
        let bad_sort = ListCategoriesParams {
            sort: Some("password".to_string()),
            ..Default::default()
        };
        let far_page = ListCategoriesParams {
            page: MAX_PAGE + 1,
            ..Default::default()
        };
        let bad_dir = ListCategoriesParams {
            dir: Some("sideways".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            CategorySearchQuery::try_from(zero_per_page),
            Err(ListCategoriesParamsError::Validation(_))
        ));
        assert!(CategorySearchQuery::try_from(too_many).is_err());
        assert!(matches!(
            CategorySearchQuery::try_from(bad_sort),
            Err(ListCategoriesParamsError::TypeConstraint(_))
        ));
        assert!(matches!(
            CategorySearchQuery::try_from(far_page),
            Err(ListCategoriesParamsError::Validation(_))
        ));
        assert!(CategorySearchQuery::try_from(bad_dir).is_err());
    }

    #[test]
    fn list_params_accept_last_page() {
        let params = ListCategoriesParams {
            page: MAX_PAGE,
            per_page: MAX_ITEMS_PER_PAGE,
            ..Default::default()
        };

        let query = CategorySearchQuery::try_from(params).unwrap();
        assert_eq!(query.page, MAX_PAGE);
    }
}
