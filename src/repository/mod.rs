use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::pagination::{DEFAULT_ITEMS_PER_PAGE, Pagination};
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters for listing categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    /// Zero-based page index.
    pub page: usize,
    pub per_page: usize,
    /// Substring matched against name or description, ignoring ASCII case
    /// only: `"DOC"` finds `"Documentaries"` but `"ДОК"` does not find
    /// `"Документальные"`. Blank terms match everything.
    pub terms: String,
    pub sort: CategorySortField,
    pub direction: SortDirection,
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            terms: String::new(),
            sort: CategorySortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl CategorySearchQuery {
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }
    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }
    pub fn sort(mut self, sort: CategorySortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    /// Number of rows to skip before the requested page.
    ///
    /// Fails instead of wrapping when the page lies beyond what SQLite can
    /// address.
    pub fn offset(&self) -> RepositoryResult<i64> {
        self.page
            .checked_mul(self.per_page)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or_else(|| {
                RepositoryError::ValidationError(format!("page {} is out of range", self.page))
            })
    }

    /// Page size as a SQL `LIMIT`.
    pub fn limit(&self) -> RepositoryResult<i64> {
        i64::try_from(self.per_page).map_err(|_| {
            RepositoryError::ValidationError(format!(
                "page size {} is out of range",
                self.per_page
            ))
        })
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// List one page of categories matching the query.
    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored representation.
    fn create(&self, category: &Category) -> RepositoryResult<Category>;
    /// Replace the mutable state of an existing category.
    fn update(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category; deleting an unknown id is not an error.
    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()>;
}

/// Everything the category use cases need from storage.
pub trait CategoryGateway: CategoryReader + CategoryWriter {}

impl<T> CategoryGateway for T where T: CategoryReader + CategoryWriter {}
