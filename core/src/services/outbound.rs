//! Outbound shipment service
//!
//! Tracks stock leaving the warehouse for a client: draft assembly,
//! allocation that follows the requested quantities, and fulfillment that
//! can never ship more than was allocated.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{OutboundItem, OutboundShipment, OutboundStatus};
use shared::validation::{validate_positive_price, validate_positive_quantity};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service behind the outbound screens
#[derive(Clone)]
pub struct OutboundService {
    store: Arc<MemStore>,
}

/// One stock line as entered on the outbound form
#[derive(Debug, Deserialize)]
pub struct OutboundItemInput {
    pub stock_unit_id: Uuid,
    pub quantity_requested: Decimal,
    pub unit_price: Decimal,
}

impl OutboundService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Assemble a draft shipment
    ///
    /// Allocation is synced to the requested quantity on every line from the
    /// start; the draft stays editable until it is confirmed.
    pub fn create_shipment(
        &self,
        client_id: Uuid,
        items: Vec<OutboundItemInput>,
    ) -> AppResult<OutboundShipment> {
        if items.is_empty() {
            return Err(AppError::validation(
                "items",
                "An outbound shipment requires at least one line",
            ));
        }

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            validate_positive_quantity(item.quantity_requested)
                .map_err(|message| AppError::validation("quantity_requested", message))?;
            validate_positive_price(item.unit_price)
                .map_err(|message| AppError::validation("unit_price", message))?;
            lines.push(OutboundItem::new(
                item.stock_unit_id,
                item.quantity_requested,
                item.unit_price,
            ));
        }

        let now = Utc::now();
        let shipment = OutboundShipment {
            id: Uuid::new_v4(),
            client_id,
            items: lines,
            status: OutboundStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.store
            .outbound_shipments
            .insert(shipment.id, shipment.clone());
        tracing::info!(shipment = %shipment.id, client = %client_id, "outbound draft created");
        Ok(shipment)
    }

    /// Change the requested quantity on a draft line
    ///
    /// Allocation follows the request and the line total is recomputed.
    pub fn set_requested_quantity(
        &self,
        shipment_id: Uuid,
        stock_unit_id: Uuid,
        quantity: Decimal,
    ) -> AppResult<OutboundShipment> {
        validate_positive_quantity(quantity)
            .map_err(|message| AppError::validation("quantity_requested", message))?;

        let shipment = self.get(shipment_id)?;
        if shipment.status != OutboundStatus::Draft {
            return Err(AppError::InvalidStateTransition(
                "Requested quantities can only change on a draft shipment".to_string(),
            ));
        }
        if !shipment
            .items
            .iter()
            .any(|item| item.stock_unit_id == stock_unit_id)
        {
            return Err(AppError::NotFound("Outbound line".to_string()));
        }

        let updated = self
            .store
            .outbound_shipments
            .update(&shipment_id, |shipment| {
                if let Some(item) = shipment
                    .items
                    .iter_mut()
                    .find(|item| item.stock_unit_id == stock_unit_id)
                {
                    item.sync_allocation(quantity);
                }
                shipment.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Outbound shipment".to_string()))?;

        Ok(updated)
    }

    /// Confirm the draft so fulfillment can start
    pub fn confirm_allocation(&self, shipment_id: Uuid) -> AppResult<OutboundShipment> {
        let shipment = self.get(shipment_id)?;
        if shipment.status != OutboundStatus::Draft {
            return Err(AppError::InvalidStateTransition(
                "Only a draft shipment can be confirmed".to_string(),
            ));
        }

        let updated = self
            .store
            .outbound_shipments
            .update(&shipment_id, |shipment| {
                shipment.status = OutboundStatus::Allocated;
                shipment.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Outbound shipment".to_string()))?;

        tracing::info!(shipment = %shipment_id, "outbound allocation confirmed");
        Ok(updated)
    }

    /// Record a shipped quantity against a confirmed line
    ///
    /// Enforces `shipped <= allocated <= requested`. The shipment flips to
    /// shipped once every line is fully fulfilled.
    pub fn ship(
        &self,
        shipment_id: Uuid,
        stock_unit_id: Uuid,
        quantity: Decimal,
    ) -> AppResult<OutboundShipment> {
        let shipment = self.get(shipment_id)?;
        if shipment.status != OutboundStatus::Allocated {
            return Err(AppError::InvalidStateTransition(
                "Only a confirmed shipment can be fulfilled".to_string(),
            ));
        }

        let item = shipment
            .items
            .iter()
            .find(|item| item.stock_unit_id == stock_unit_id)
            .ok_or_else(|| AppError::NotFound("Outbound line".to_string()))?;

        let mut probe = item.clone();
        probe
            .ship(quantity)
            .map_err(|message| AppError::validation("quantity_shipped", message))?;

        let updated = self
            .store
            .outbound_shipments
            .update(&shipment_id, |shipment| {
                if let Some(item) = shipment
                    .items
                    .iter_mut()
                    .find(|item| item.stock_unit_id == stock_unit_id)
                {
                    // Validated on the probe above; the closure cannot fail.
                    let _ = item.ship(quantity);
                }
                if shipment.items.iter().all(OutboundItem::fully_shipped) {
                    shipment.status = OutboundStatus::Shipped;
                }
                shipment.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Outbound shipment".to_string()))?;

        tracing::info!(
            shipment = %shipment_id,
            stock_unit = %stock_unit_id,
            quantity = %quantity,
            status = ?updated.status,
            "outbound quantity shipped"
        );
        Ok(updated)
    }

    pub fn get(&self, id: Uuid) -> AppResult<OutboundShipment> {
        self.store
            .outbound_shipments
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Outbound shipment".to_string()))
    }

    pub fn list_for_client(&self, client_id: Uuid) -> Vec<OutboundShipment> {
        let mut shipments = self
            .store
            .outbound_shipments
            .filter(|shipment| shipment.client_id == client_id);
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }
}
