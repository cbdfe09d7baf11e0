//! Outbound shipment models
//!
//! An outbound shipment moves stock to a client, tracked from allocation
//! through shipment. Quantities obey `shipped <= allocated <= requested`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stock line within an outbound shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundItem {
    pub stock_unit_id: Uuid,
    pub quantity_requested: Decimal,
    pub quantity_allocated: Decimal,
    pub quantity_shipped: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl OutboundItem {
    pub fn new(stock_unit_id: Uuid, quantity_requested: Decimal, unit_price: Decimal) -> Self {
        let mut item = Self {
            stock_unit_id,
            quantity_requested,
            quantity_allocated: Decimal::ZERO,
            quantity_shipped: Decimal::ZERO,
            unit_price,
            total_price: Decimal::ZERO,
        };
        item.sync_allocation(quantity_requested);
        item
    }

    /// Apply a requested-quantity change
    ///
    /// Allocation follows the requested quantity and the line total is
    /// recomputed. The shipped quantity is independent and only advances
    /// through [`OutboundItem::ship`].
    pub fn sync_allocation(&mut self, quantity_requested: Decimal) {
        self.quantity_requested = quantity_requested;
        self.quantity_allocated = quantity_requested;
        self.total_price = quantity_requested * self.unit_price;
    }

    /// Record shipped quantity, keeping `shipped <= allocated`
    pub fn ship(&mut self, quantity: Decimal) -> Result<(), &'static str> {
        if quantity <= Decimal::ZERO {
            return Err("Shipped quantity must be positive");
        }
        let shipped = self.quantity_shipped + quantity;
        if shipped > self.quantity_allocated {
            return Err("Cannot ship more than the allocated quantity");
        }
        self.quantity_shipped = shipped;
        Ok(())
    }

    pub fn fully_shipped(&self) -> bool {
        self.quantity_allocated > Decimal::ZERO && self.quantity_shipped == self.quantity_allocated
    }
}

/// Fulfillment status of an outbound shipment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutboundStatus {
    Draft,
    Allocated,
    Shipped,
}

/// A warehouse-side shipment of stock to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundShipment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub items: Vec<OutboundItem>,
    pub status: OutboundStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OutboundShipment {
    /// Total value across all lines
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price).sum()
    }
}
