//! Purchase order assembly service
//!
//! Builds purchase order drafts from quote lines or catalog picks, keeps
//! totals consistent, and walks the draft/submitted/cancelled lifecycle.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{
    ManualEntryStatus, OrderLine, OrderLineSource, OrderStatus, PurchaseOrder,
};
use shared::validation::validate_positive_quantity;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service behind the order creation pages
#[derive(Clone)]
pub struct PurchaseOrderService {
    store: Arc<MemStore>,
}

/// A requested order line, from the catalog or from a manual entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLineInput {
    Catalog {
        catalog_item_id: Uuid,
        quantity: Decimal,
        /// Overrides the catalog price when a quote negotiated one
        unit_price: Option<Decimal>,
    },
    Manual {
        manual_entry_id: Uuid,
        quantity: Decimal,
    },
}

impl PurchaseOrderService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Assemble a draft order for a supplier
    ///
    /// Catalog lines price from the catalog unless the quote negotiated a
    /// price; manual lines price from the entry and must not be rejected.
    pub fn create_draft(
        &self,
        supplier_id: Uuid,
        lines: Vec<OrderLineInput>,
    ) -> AppResult<PurchaseOrder> {
        let supplier = self
            .store
            .suppliers
            .get(&supplier_id)
            .ok_or_else(|| AppError::NotFound("Supplier".to_string()))?;
        if !supplier.active {
            return Err(AppError::validation("supplier_id", "Supplier is not active"));
        }
        if lines.is_empty() {
            return Err(AppError::validation(
                "lines",
                "A purchase order requires at least one line",
            ));
        }

        let mut resolved = Vec::with_capacity(lines.len());
        for line in lines {
            resolved.push(self.resolve_line(line)?);
        }

        let now = Utc::now();
        let mut order = PurchaseOrder {
            id: Uuid::new_v4(),
            supplier_id,
            lines: resolved,
            status: OrderStatus::Draft,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        order.recompute_totals();

        self.store.purchase_orders.insert(order.id, order.clone());
        tracing::info!(
            order = %order.id,
            supplier = %supplier_id,
            lines = order.lines.len(),
            total = %order.total,
            "purchase order draft created"
        );
        Ok(order)
    }

    fn resolve_line(&self, input: OrderLineInput) -> AppResult<OrderLine> {
        match input {
            OrderLineInput::Catalog {
                catalog_item_id,
                quantity,
                unit_price,
            } => {
                validate_positive_quantity(quantity)
                    .map_err(|message| AppError::validation("quantity", message))?;
                let item = self
                    .store
                    .catalog_items
                    .get(&catalog_item_id)
                    .ok_or_else(|| AppError::NotFound("Catalog item".to_string()))?;
                Ok(OrderLine::new(
                    OrderLineSource::CatalogItem(catalog_item_id),
                    item.name,
                    quantity,
                    unit_price.unwrap_or(item.price),
                ))
            }
            OrderLineInput::Manual {
                manual_entry_id,
                quantity,
            } => {
                validate_positive_quantity(quantity)
                    .map_err(|message| AppError::validation("quantity", message))?;
                let entry = self
                    .store
                    .manual_entries
                    .get(&manual_entry_id)
                    .ok_or_else(|| AppError::NotFound("Manual entry".to_string()))?;
                if entry.status == ManualEntryStatus::Rejected {
                    return Err(AppError::validation(
                        "manual_entry_id",
                        "A rejected manual entry cannot be ordered",
                    ));
                }
                Ok(OrderLine::new(
                    OrderLineSource::ManualEntry(manual_entry_id),
                    entry.name,
                    quantity,
                    entry.price,
                ))
            }
        }
    }

    /// Submit a draft to the supplier
    pub fn submit(&self, order_id: Uuid) -> AppResult<PurchaseOrder> {
        self.transition(order_id, OrderStatus::Draft, OrderStatus::Submitted)
    }

    /// Cancel a draft or submitted order
    pub fn cancel(&self, order_id: Uuid) -> AppResult<PurchaseOrder> {
        let order = self.get(order_id)?;
        if order.status == OrderStatus::Cancelled {
            return Err(AppError::InvalidStateTransition(
                "Order is already cancelled".to_string(),
            ));
        }
        self.transition(order_id, order.status, OrderStatus::Cancelled)
    }

    fn transition(
        &self,
        order_id: Uuid,
        expected_from: OrderStatus,
        to: OrderStatus,
    ) -> AppResult<PurchaseOrder> {
        let order = self.get(order_id)?;
        if order.status != expected_from {
            return Err(AppError::InvalidStateTransition(format!(
                "Order cannot move from {:?} to {:?}",
                order.status, to
            )));
        }

        let updated = self
            .store
            .purchase_orders
            .update(&order_id, |order| {
                order.status = to;
                order.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Purchase order".to_string()))?;

        tracing::info!(order = %order_id, status = ?to, "purchase order transitioned");
        Ok(updated)
    }

    pub fn get(&self, id: Uuid) -> AppResult<PurchaseOrder> {
        self.store
            .purchase_orders
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Purchase order".to_string()))
    }

    /// Orders addressed to one supplier, newest first
    pub fn list_for_supplier(&self, supplier_id: Uuid) -> Vec<PurchaseOrder> {
        let mut orders = self
            .store
            .purchase_orders
            .filter(|order| order.supplier_id == supplier_id);
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }
}
