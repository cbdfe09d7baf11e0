//! Manually entered product models
//!
//! A manual product is a line item typed freely into a quote instead of
//! selected from the catalog. It stays pending until an administrator
//! approves, rejects, or links it to a canonical catalog record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A manually entered product awaiting reconciliation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEntry {
    pub id: Uuid,
    /// Quote this entry originated from
    pub quote_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub status: ManualEntryStatus,
    /// Set when the entry is linked to a catalog record
    pub linked_catalog_item_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of a manual entry
///
/// Entries are never physically deleted; rejection is a soft transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManualEntryStatus {
    Pending,
    Approved,
    Rejected,
    Linked,
}

impl std::fmt::Display for ManualEntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManualEntryStatus::Pending => write!(f, "Pending"),
            ManualEntryStatus::Approved => write!(f, "Approved"),
            ManualEntryStatus::Rejected => write!(f, "Rejected"),
            ManualEntryStatus::Linked => write!(f, "Linked"),
        }
    }
}

/// Whether a manual entry may move from one lifecycle status to another
///
/// Rejected and Linked are terminal. An approved entry may still be linked
/// to a catalog record or rejected after review.
pub fn is_valid_entry_transition(from: ManualEntryStatus, to: ManualEntryStatus) -> bool {
    use ManualEntryStatus::*;
    matches!(
        (from, to),
        (Pending, Approved) | (Pending, Rejected) | (Pending, Linked) | (Approved, Linked) | (Approved, Rejected)
    )
}
