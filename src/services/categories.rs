//! Category use cases.
//!
//! Each function loads or builds a [`Category`], validates it and only then
//! talks to the repository. Invalid input never reaches storage.

use crate::domain::AggregateRoot;
use crate::domain::category::Category;
use crate::domain::errors::DomainError;
use crate::domain::pagination::Pagination;
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ThrowsValidationHandler};
use crate::dto::categories::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    UpdateCategoryCommand, UpdateCategoryOutput,
};
use crate::repository::{CategoryGateway, CategoryReader, CategorySearchQuery, CategoryWriter};

use super::ServiceResult;

/// Creates a category, failing on the first validation error.
///
/// Repository failures are returned unchanged as
/// [`ServiceError::Repository`](super::ServiceError::Repository).
pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> ServiceResult<CreateCategoryOutput>
where
    R: CategoryWriter,
{
    let category = Category::new_category(command.name, command.description, command.is_active);

    if let Err(e) = category.validate(&mut ThrowsValidationHandler) {
        log::debug!("Rejected new category: {e}");
        return Err(e.into());
    }

    match repo.create(&category) {
        Ok(created) => {
            log::info!("Created category {}", created.id());
            Ok(CreateCategoryOutput::from(&created))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(e.into())
        }
    }
}

/// Updates a category, collecting every problem into a [`Notification`].
///
/// An unknown id is reported as not found before the new values are looked
/// at. Validation errors and failures of the write itself both come back as
/// [`ServiceError::Notification`](super::ServiceError::Notification).
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<UpdateCategoryOutput>
where
    R: CategoryGateway,
{
    let mut category = match repo.find_by_id(&command.id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(DomainError::not_found::<Category>(&command.id).into()),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    };

    category.update(command.name, command.description, command.is_active);

    let mut notification = Notification::new();
    category.validate(&mut notification)?;
    if notification.has_errors() {
        return Err(notification.into());
    }

    match notification.validate(|| repo.update(&category)) {
        Some(updated) => {
            log::info!("Updated category {}", updated.id());
            Ok(UpdateCategoryOutput::from(&updated))
        }
        None => {
            log::error!("Failed to update category {}: {notification}", command.id);
            Err(notification.into())
        }
    }
}

/// Deletes a category. Unknown ids are not an error.
pub fn delete_category<R>(id: &CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    match repo.delete_by_id(id) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(e.into())
        }
    }
}

pub fn get_category_by_id<R>(id: &CategoryId, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    match repo.find_by_id(id) {
        Ok(Some(category)) => Ok(CategoryOutput::from(category)),
        Ok(None) => Err(DomainError::not_found::<Category>(id).into()),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(e.into())
        }
    }
}

/// Lists categories; filtering, sorting and paging are up to the repository.
pub fn list_categories<R>(
    query: &CategorySearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListOutput>>
where
    R: CategoryReader,
{
    match repo.find_all(query) {
        Ok(page) => Ok(page.map(CategoryListOutput::from)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}
