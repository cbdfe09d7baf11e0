//! Purchase order models
//!
//! Purchase orders are assembled from quote lines or catalog picks on the
//! dashboard; each line references either a catalog item or a manual entry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a purchase order line points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderLineSource {
    CatalogItem(Uuid),
    ManualEntry(Uuid),
}

/// One line of a purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub source: OrderLineSource,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl OrderLine {
    pub fn new(
        source: OrderLineSource,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            source,
            description: description.into(),
            quantity,
            unit_price,
            line_total: quantity * unit_price,
        }
    }
}

/// Lifecycle status of a purchase order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Cancelled,
}

/// A purchase order addressed to a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Recompute line totals and the order total
    pub fn recompute_totals(&mut self) {
        for line in &mut self.lines {
            line.line_total = line.quantity * line.unit_price;
        }
        self.total = self.lines.iter().map(|line| line.line_total).sum();
    }
}
