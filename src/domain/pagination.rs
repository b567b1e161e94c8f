use serde::{Deserialize, Serialize};

/// Listings return this many items per page unless asked otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    /// Zero-based index of this page.
    pub current_page: usize,
    pub per_page: usize,
    /// Number of matching items across all pages.
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Projects every item while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_metadata() {
        let page = Pagination::new(2, 3, 7, vec![1, 2, 3]).map(|n| n * 10);

        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 3);
        assert_eq!(page.total, 7);
        assert_eq!(page.items, vec![10, 20, 30]);
    }
}
