//! Purchase order assembly tests
//!
//! Covers line resolution (catalog vs manual pricing), total computation,
//! and the draft/submitted/cancelled lifecycle.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use procurement_admin_core::error::AppError;
use procurement_admin_core::services::manual_products::{
    CreateManualEntryInput, ManualProductService,
};
use procurement_admin_core::services::purchase_orders::{OrderLineInput, PurchaseOrderService};
use procurement_admin_core::services::suppliers::{CreateSupplierInput, SupplierService};
use procurement_admin_core::store::MemStore;
use shared::models::{OrderLineSource, OrderStatus};
use uuid::Uuid;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

struct Fixture {
    store: Arc<MemStore>,
    orders: PurchaseOrderService,
    suppliers: SupplierService,
    manual: ManualProductService,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(MemStore::with_mock_data());
        Self {
            orders: PurchaseOrderService::new(store.clone()),
            suppliers: SupplierService::new(store.clone()),
            manual: ManualProductService::new(store.clone()),
            store,
        }
    }

    fn supplier_id(&self) -> Uuid {
        self.suppliers.list(true)[0].id
    }

    fn catalog_item_id(&self, name: &str) -> Uuid {
        self.store
            .catalog_items
            .filter(|item| item.name == name)
            .pop()
            .unwrap()
            .id
    }

    fn manual_entry(&self, name: &str, price: &str) -> Uuid {
        self.manual
            .create(CreateManualEntryInput {
                quote_id: Uuid::new_v4(),
                name: name.to_string(),
                price: dec(price),
                sku: None,
                description: None,
            })
            .unwrap()
            .id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_catalog_line_prices_from_catalog() {
        let fx = Fixture::new();
        let item_id = fx.catalog_item_id("Bosch GSB 18V Drill");

        let order = fx
            .orders
            .create_draft(
                fx.supplier_id(),
                vec![OrderLineInput::Catalog {
                    catalog_item_id: item_id,
                    quantity: dec("2"),
                    unit_price: None,
                }],
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::Draft);
        assert_eq!(order.lines[0].unit_price, dec("189.50"));
        assert_eq!(order.lines[0].line_total, dec("379.00"));
        assert_eq!(order.total, dec("379.00"));
        assert!(matches!(
            order.lines[0].source,
            OrderLineSource::CatalogItem(id) if id == item_id
        ));
    }

    #[test]
    fn test_negotiated_price_overrides_catalog() {
        let fx = Fixture::new();
        let item_id = fx.catalog_item_id("Bosch GSB 18V Drill");

        let order = fx
            .orders
            .create_draft(
                fx.supplier_id(),
                vec![OrderLineInput::Catalog {
                    catalog_item_id: item_id,
                    quantity: dec("2"),
                    unit_price: Some(dec("150.00")),
                }],
            )
            .unwrap();

        assert_eq!(order.lines[0].unit_price, dec("150.00"));
        assert_eq!(order.total, dec("300.00"));
    }

    #[test]
    fn test_manual_line_prices_from_entry() {
        let fx = Fixture::new();
        let entry_id = fx.manual_entry("Custom mounting bracket", "42.00");

        let order = fx
            .orders
            .create_draft(
                fx.supplier_id(),
                vec![OrderLineInput::Manual {
                    manual_entry_id: entry_id,
                    quantity: dec("3"),
                }],
            )
            .unwrap();

        assert_eq!(order.lines[0].unit_price, dec("42.00"));
        assert_eq!(order.lines[0].description, "Custom mounting bracket");
        assert_eq!(order.total, dec("126.00"));
    }

    #[test]
    fn test_rejected_manual_entry_cannot_be_ordered() {
        let fx = Fixture::new();
        let entry_id = fx.manual_entry("Custom mounting bracket", "42.00");
        fx.manual.reject(entry_id).unwrap();

        let result = fx.orders.create_draft(
            fx.supplier_id(),
            vec![OrderLineInput::Manual {
                manual_entry_id: entry_id,
                quantity: dec("1"),
            }],
        );
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_mixed_lines_total() {
        let fx = Fixture::new();
        let item_id = fx.catalog_item_id("Site Safety Helmet");
        let entry_id = fx.manual_entry("Custom mounting bracket", "42.00");

        let order = fx
            .orders
            .create_draft(
                fx.supplier_id(),
                vec![
                    OrderLineInput::Catalog {
                        catalog_item_id: item_id,
                        quantity: dec("10"),
                        unit_price: None,
                    },
                    OrderLineInput::Manual {
                        manual_entry_id: entry_id,
                        quantity: dec("2"),
                    },
                ],
            )
            .unwrap();

        // 10 * 24.50 + 2 * 42.00
        assert_eq!(order.total, dec("329.00"));
    }

    #[test]
    fn test_unknown_supplier_rejected() {
        let fx = Fixture::new();
        let item_id = fx.catalog_item_id("Site Safety Helmet");

        let result = fx.orders.create_draft(
            Uuid::new_v4(),
            vec![OrderLineInput::Catalog {
                catalog_item_id: item_id,
                quantity: dec("1"),
                unit_price: None,
            }],
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_inactive_supplier_rejected() {
        let fx = Fixture::new();
        let supplier_id = fx.supplier_id();
        fx.suppliers.deactivate(supplier_id).unwrap();
        let item_id = fx.catalog_item_id("Site Safety Helmet");

        let result = fx.orders.create_draft(
            supplier_id,
            vec![OrderLineInput::Catalog {
                catalog_item_id: item_id,
                quantity: dec("1"),
                unit_price: None,
            }],
        );
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_empty_order_rejected() {
        let fx = Fixture::new();
        let result = fx.orders.create_draft(fx.supplier_id(), vec![]);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_submit_and_cancel_lifecycle() {
        let fx = Fixture::new();
        let item_id = fx.catalog_item_id("Site Safety Helmet");
        let order = fx
            .orders
            .create_draft(
                fx.supplier_id(),
                vec![OrderLineInput::Catalog {
                    catalog_item_id: item_id,
                    quantity: dec("1"),
                    unit_price: None,
                }],
            )
            .unwrap();

        let submitted = fx.orders.submit(order.id).unwrap();
        assert_eq!(submitted.status, OrderStatus::Submitted);

        // A submitted order cannot be submitted again
        let result = fx.orders.submit(order.id);
        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));

        let cancelled = fx.orders.cancel(order.id).unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);

        // Cancellation is terminal
        let result = fx.orders.cancel(order.id);
        assert!(matches!(result, Err(AppError::InvalidStateTransition(_))));
    }

    #[test]
    fn test_orders_listed_per_supplier() {
        let fx = Fixture::new();
        let supplier_id = fx.supplier_id();
        let other_supplier_id = fx.suppliers.list(true)[1].id;
        let item_id = fx.catalog_item_id("Site Safety Helmet");

        let line = |qty: &str| OrderLineInput::Catalog {
            catalog_item_id: item_id,
            quantity: dec(qty),
            unit_price: None,
        };

        fx.orders.create_draft(supplier_id, vec![line("1")]).unwrap();
        fx.orders.create_draft(supplier_id, vec![line("2")]).unwrap();
        fx.orders
            .create_draft(other_supplier_id, vec![line("3")])
            .unwrap();

        assert_eq!(fx.orders.list_for_supplier(supplier_id).len(), 2);
        assert_eq!(fx.orders.list_for_supplier(other_supplier_id).len(), 1);
    }
}
