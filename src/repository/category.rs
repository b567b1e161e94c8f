use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::models::category::{Category as DbCategory, CategoryChangeset};
use crate::repository::{
    CategoryReader, CategorySearchQuery, CategoryWriter, DieselRepository, RepositoryResult,
};

const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` wildcards so search terms match literally.
fn escape_like(terms: &str) -> String {
    let mut escaped = String::with_capacity(terms.len());
    for c in terms.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

impl CategoryReader for DieselRepository {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(Category::try_from).transpose()?;
        Ok(category)
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        use crate::schema::categories;

        let offset = query.offset()?;
        let limit = query.limit()?;
        let mut conn = self.conn()?;

        let terms = query.terms.trim();
        let pattern = (!terms.is_empty()).then(|| format!("%{}%", escape_like(terms)));

        // SQLite LIKE is case-insensitive for ASCII.
        let query_builder = || {
            let mut items = categories::table.into_boxed::<Sqlite>();
            if let Some(pattern) = &pattern {
                items = items.filter(
                    categories::name
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE)
                        .or(categories::description
                            .like(pattern.clone())
                            .escape(LIKE_ESCAPE)),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let items = match (query.sort, query.direction) {
            (CategorySortField::Name, SortDirection::Asc) => {
                query_builder().order(categories::name.asc())
            }
            (CategorySortField::Name, SortDirection::Desc) => {
                query_builder().order(categories::name.desc())
            }
            (CategorySortField::Description, SortDirection::Asc) => {
                query_builder().order(categories::description.asc())
            }
            (CategorySortField::Description, SortDirection::Desc) => {
                query_builder().order(categories::description.desc())
            }
            (CategorySortField::CreatedAt, SortDirection::Asc) => {
                query_builder().order(categories::created_at.asc())
            }
            (CategorySortField::CreatedAt, SortDirection::Desc) => {
                query_builder().order(categories::created_at.desc())
            }
            (CategorySortField::UpdatedAt, SortDirection::Asc) => {
                query_builder().order(categories::updated_at.asc())
            }
            (CategorySortField::UpdatedAt, SortDirection::Desc) => {
                query_builder().order(categories::updated_at.desc())
            }
        };

        let items = items
            .then_order_by(categories::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

impl CategoryWriter for DieselRepository {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = DbCategory::try_from(category)?;

        let inserted = diesel::insert_into(categories::table)
            .values(&db_category)
            .returning(DbCategory::as_returning())
            .get_result(&mut conn)?;

        Ok(Category::try_from(inserted)?)
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::domain::AggregateRoot;
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changes = CategoryChangeset::try_from(category)?;

        let updated = diesel::update(categories::table.find(category.id().as_str()))
            .set(&changes)
            .returning(DbCategory::as_returning())
            .get_result(&mut conn)?;

        Ok(Category::try_from(updated)?)
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.as_str())).execute(&mut conn)?;
        if affected == 0 {
            log::debug!("Category {id} was already absent");
        }

        Ok(())
    }
}
