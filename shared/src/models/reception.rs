//! Warehouse reception models
//!
//! A reception records the quantities actually received against a delivery's
//! expected quantities, per item and condition.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One received line within a reception record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedItem {
    pub variant_id: Uuid,
    pub quantity_expected: Decimal,
    /// Clamped to [0, quantity_expected] at the input boundary
    pub quantity_received: Decimal,
    pub condition: ItemCondition,
}

/// Physical condition of received goods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    Good,
    Damaged,
    Defective,
}

/// Completeness of a reception record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReceptionStatus {
    Complete,
    Partial,
}

impl std::fmt::Display for ReceptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceptionStatus::Complete => write!(f, "complete"),
            ReceptionStatus::Partial => write!(f, "partial"),
        }
    }
}

/// A reception aggregating the received lines for one delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceptionRecord {
    pub id: Uuid,
    pub delivery_id: Uuid,
    pub items: Vec<ReceivedItem>,
    pub status: ReceptionStatus,
    pub received_at: DateTime<Utc>,
}

/// Derive the completeness status of a batch of received lines
///
/// Complete iff the received total covers the expected total. Returns None
/// for an empty batch; callers surface that as an input error.
pub fn derive_reception_status(items: &[ReceivedItem]) -> Option<ReceptionStatus> {
    if items.is_empty() {
        return None;
    }

    let expected: Decimal = items.iter().map(|item| item.quantity_expected).sum();
    let received: Decimal = items.iter().map(|item| item.quantity_received).sum();

    if received >= expected {
        Some(ReceptionStatus::Complete)
    } else {
        Some(ReceptionStatus::Partial)
    }
}
