//! Manual product administration tests
//!
//! Covers entry registration, the approval lifecycle, catalog linking, and
//! paginated listing.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use procurement_admin_core::error::AppError;
use procurement_admin_core::services::manual_products::{
    CreateManualEntryInput, ManualProductService,
};
use procurement_admin_core::store::MemStore;
use shared::models::ManualEntryStatus;
use shared::types::Pagination;
use uuid::Uuid;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn input(name: &str, price: &str) -> CreateManualEntryInput {
    CreateManualEntryInput {
        quote_id: Uuid::new_v4(),
        name: name.to_string(),
        price: dec(price),
        sku: None,
        description: None,
    }
}

struct Fixture {
    store: Arc<MemStore>,
    manual: ManualProductService,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(MemStore::with_mock_data());
        Self {
            manual: ManualProductService::new(store.clone()),
            store,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_created_entry_starts_pending() {
        let fx = Fixture::new();
        let entry = fx.manual.create(input("Laptop stand", "35.00")).unwrap();

        assert_eq!(entry.status, ManualEntryStatus::Pending);
        assert!(entry.linked_catalog_item_id.is_none());
    }

    #[test]
    fn test_name_is_trimmed() {
        let fx = Fixture::new();
        let entry = fx.manual.create(input("  Laptop stand  ", "35.00")).unwrap();
        assert_eq!(entry.name, "Laptop stand");
    }

    #[test]
    fn test_blank_name_rejected() {
        let fx = Fixture::new();
        let result = fx.manual.create(input("   ", "35.00"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let fx = Fixture::new();
        let result = fx.manual.create(input("Laptop stand", "0"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_malformed_sku_rejected() {
        let fx = Fixture::new();
        let mut bad = input("Laptop stand", "35.00");
        bad.sku = Some("a!".to_string());
        let result = fx.manual.create(bad);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_approve_then_link() {
        let fx = Fixture::new();
        let catalog_item_id = fx.store.catalog_items.all()[0].id;
        let entry = fx.manual.create(input("Laptop stand", "35.00")).unwrap();

        let approved = fx.manual.approve(entry.id).unwrap();
        assert_eq!(approved.status, ManualEntryStatus::Approved);

        let linked = fx.manual.link(entry.id, catalog_item_id).unwrap();
        assert_eq!(linked.status, ManualEntryStatus::Linked);
        assert_eq!(linked.linked_catalog_item_id, Some(catalog_item_id));
    }

    #[test]
    fn test_rejection_is_terminal() {
        let fx = Fixture::new();
        let entry = fx.manual.create(input("Laptop stand", "35.00")).unwrap();

        fx.manual.reject(entry.id).unwrap();
        let result = fx.manual.approve(entry.id);
        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));
    }

    #[test]
    fn test_link_requires_existing_catalog_item() {
        let fx = Fixture::new();
        let entry = fx.manual.create(input("Laptop stand", "35.00")).unwrap();

        let result = fx.manual.link(entry.id, Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound(_))));
        // The failed link leaves the entry untouched
        assert_eq!(
            fx.manual.get(entry.id).unwrap().status,
            ManualEntryStatus::Pending
        );
    }

    #[test]
    fn test_linked_entry_cannot_change() {
        let fx = Fixture::new();
        let catalog_item_id = fx.store.catalog_items.all()[0].id;
        let entry = fx.manual.create(input("Laptop stand", "35.00")).unwrap();
        fx.manual.link(entry.id, catalog_item_id).unwrap();

        let result = fx.manual.reject(entry.id);
        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));
    }

    #[test]
    fn test_list_filters_by_status() {
        let fx = Fixture::new();
        let pending = fx.manual.create(input("First", "1.00")).unwrap();
        let rejected = fx.manual.create(input("Second", "2.00")).unwrap();
        fx.manual.reject(rejected.id).unwrap();

        let page = fx
            .manual
            .list(Some(ManualEntryStatus::Pending), &Pagination::default());
        assert_eq!(page.pagination.total_items, 1);
        assert_eq!(page.data[0].id, pending.id);

        let all = fx.manual.list(None, &Pagination::default());
        assert_eq!(all.pagination.total_items, 2);
    }

    #[test]
    fn test_list_paginates() {
        let fx = Fixture::new();
        for i in 0..5 {
            fx.manual
                .create(input(&format!("Entry {i}"), "1.00"))
                .unwrap();
        }

        let pagination = Pagination {
            page: 2,
            per_page: 2,
        };
        let page = fx.manual.list(None, &pagination);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 3);
    }
}
