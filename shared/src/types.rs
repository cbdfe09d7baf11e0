//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Postal address for suppliers, clients, and delivery stops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: None,
            country: "France".to_string(),
        }
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Slice a full result set down to the requested page
    pub fn paginate(items: Vec<T>, pagination: &Pagination) -> Self {
        let per_page = pagination.per_page.max(1);
        let page = pagination.page.max(1);
        let total_items = items.len() as u64;
        let total_pages = (total_items as u32).div_ceil(per_page).max(1);

        let start = ((page - 1) * per_page) as usize;
        let data: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();

        Self {
            data,
            pagination: PaginationMeta {
                page,
                per_page,
                total_items,
                total_pages,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// Date range for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices_requested_page() {
        let items: Vec<i32> = (1..=45).collect();
        let page = PaginatedResponse::paginate(
            items,
            &Pagination {
                page: 2,
                per_page: 20,
            },
        );

        assert_eq!(page.data.first(), Some(&21));
        assert_eq!(page.data.len(), 20);
        assert_eq!(page.pagination.total_items, 45);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_paginate_empty_set() {
        let page = PaginatedResponse::<i32>::paginate(vec![], &Pagination::default());
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }
}
