//! Delivery chain models
//!
//! A delivery chain is an ordered multi-stop shipment path for a single
//! product/quantity, ending at a non-intermediate final destination. The
//! chain advances through an explicit state machine rather than a freely
//! mutable stop index, so invalid indices cannot occur.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Address;

/// A single stop in a delivery chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub id: Uuid,
    pub location_type: StopLocationType,
    pub address: Address,
    pub status: StopStatus,
    /// False only for the last stop in its chain; derived from position
    pub is_intermediate: bool,
}

/// Kind of location a stop points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopLocationType {
    Warehouse,
    ProjectSite,
    ClientLocation,
    Supplier,
}

/// Progress status of a single stop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    Pending,
    InTransit,
    Delivered,
    Delayed,
}

/// Overall status of a delivery chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChainStatus {
    Pending,
    InProgress,
    Completed,
    Delayed,
}

/// Stop data supplied when authoring a chain
///
/// Any `is_intermediate` flag in the draft is ignored; the flag is derived
/// purely from position when the chain is created.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDraft {
    pub location_type: StopLocationType,
    pub address: Address,
}

/// An ordered multi-stop shipment for one product/quantity pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryChain {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: Decimal,
    pub stops: Vec<DeliveryStop>,
    /// Invariant: always < stops.len()
    pub current_stop_index: usize,
    pub overall_status: ChainStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryChain {
    /// Build a chain from ordered stop drafts
    ///
    /// The final stop gets `is_intermediate = false`, every prior stop
    /// `true`, regardless of draft input. Fails on an empty draft list.
    pub fn from_drafts(
        product_id: Uuid,
        quantity: Decimal,
        drafts: Vec<StopDraft>,
    ) -> Result<Self, &'static str> {
        if drafts.is_empty() {
            return Err("A delivery chain requires at least one stop");
        }

        let last = drafts.len() - 1;
        let stops = drafts
            .into_iter()
            .enumerate()
            .map(|(position, draft)| DeliveryStop {
                id: Uuid::new_v4(),
                location_type: draft.location_type,
                address: draft.address,
                status: StopStatus::Pending,
                is_intermediate: position != last,
            })
            .collect();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            stops,
            current_stop_index: 0,
            overall_status: ChainStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Mark the current stop delivered and move the pointer forward
    ///
    /// The next pending stop (if any) becomes in-transit. Advancing a
    /// completed chain is a no-op, so the terminal state is idempotent.
    /// Returns whether the chain changed.
    pub fn advance(&mut self) -> bool {
        if self.overall_status == ChainStatus::Completed {
            return false;
        }

        self.stops[self.current_stop_index].status = StopStatus::Delivered;
        if self.current_stop_index + 1 < self.stops.len() {
            self.current_stop_index += 1;
            let next = &mut self.stops[self.current_stop_index];
            if next.status == StopStatus::Pending {
                next.status = StopStatus::InTransit;
            }
        }

        self.recompute_status();
        self.updated_at = Utc::now();
        true
    }

    /// Flag a stop as delayed
    ///
    /// Delivered stops cannot be delayed after the fact.
    pub fn mark_stop_delayed(&mut self, stop_index: usize) -> Result<(), &'static str> {
        let stop = self
            .stops
            .get_mut(stop_index)
            .ok_or("Stop index out of range")?;
        if stop.status == StopStatus::Delivered {
            return Err("A delivered stop cannot be delayed");
        }

        stop.status = StopStatus::Delayed;
        self.recompute_status();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Derive the overall status from the stop statuses
    ///
    /// Completed once the final stop is delivered, otherwise delayed if any
    /// stop is delayed, pending while nothing has moved, else in progress.
    pub fn recompute_status(&mut self) {
        let last_delivered = self
            .stops
            .last()
            .is_some_and(|stop| stop.status == StopStatus::Delivered);

        self.overall_status = if last_delivered {
            ChainStatus::Completed
        } else if self
            .stops
            .iter()
            .any(|stop| stop.status == StopStatus::Delayed)
        {
            ChainStatus::Delayed
        } else if self
            .stops
            .iter()
            .all(|stop| stop.status == StopStatus::Pending)
        {
            ChainStatus::Pending
        } else {
            ChainStatus::InProgress
        };
    }

    /// Stop the shipment is currently at (or heading to)
    pub fn current_stop(&self) -> &DeliveryStop {
        &self.stops[self.current_stop_index]
    }
}
