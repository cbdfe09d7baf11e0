//! Warehouse reception service
//!
//! Records quantities actually received against a delivery's expected
//! quantities and derives the completeness status of each record.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{
    derive_reception_status, ItemCondition, ReceivedItem, ReceptionRecord, ReceptionStatus,
};
use shared::validation::{clamp_received_quantity, validate_expected_quantity};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Service behind the receiving screens
#[derive(Clone)]
pub struct ReceptionService {
    store: Arc<MemStore>,
}

/// One received line as typed into the reception form
#[derive(Debug, Deserialize)]
pub struct ReceivedItemInput {
    pub variant_id: Uuid,
    pub quantity_expected: Decimal,
    pub quantity_received: Decimal,
    pub condition: ItemCondition,
}

/// Input for recording a reception against a delivery
#[derive(Debug, Deserialize)]
pub struct RecordReceptionInput {
    pub delivery_id: Uuid,
    pub items: Vec<ReceivedItemInput>,
}

impl ReceptionService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Reconcile a batch of received lines into a completeness status
    ///
    /// Complete iff the received total covers the expected total. An empty
    /// batch is an input error, not a status.
    pub fn reconcile(&self, items: &[ReceivedItem]) -> AppResult<ReceptionStatus> {
        derive_reception_status(items)
            .ok_or_else(|| AppError::EmptyInput("Reception batch has no items".to_string()))
    }

    /// Record a reception, clamping free-form quantities at the boundary
    ///
    /// The form accepts any typed number; received quantities are clamped to
    /// `[0, expected]` here so the reconciler only ever sees valid lines.
    pub fn record(&self, input: RecordReceptionInput) -> AppResult<ReceptionRecord> {
        if input.items.is_empty() {
            return Err(AppError::EmptyInput(
                "Reception batch has no items".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(input.items.len());
        for line in input.items {
            validate_expected_quantity(line.quantity_expected)
                .map_err(|message| AppError::validation("quantity_expected", message))?;

            let clamped = clamp_received_quantity(line.quantity_expected, line.quantity_received);
            if clamped != line.quantity_received {
                tracing::warn!(
                    variant = %line.variant_id,
                    received = %line.quantity_received,
                    clamped = %clamped,
                    "received quantity clamped to expected range"
                );
            }

            items.push(ReceivedItem {
                variant_id: line.variant_id,
                quantity_expected: line.quantity_expected,
                quantity_received: clamped,
                condition: line.condition,
            });
        }

        let status = self.reconcile(&items)?;
        let record = ReceptionRecord {
            id: Uuid::new_v4(),
            delivery_id: input.delivery_id,
            items,
            status,
            received_at: Utc::now(),
        };

        self.store.receptions.insert(record.id, record.clone());
        tracing::info!(
            reception = %record.id,
            delivery = %record.delivery_id,
            status = %record.status,
            "reception recorded"
        );
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> AppResult<ReceptionRecord> {
        self.store
            .receptions
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Reception record".to_string()))
    }

    /// All receptions recorded against one delivery, oldest first
    pub fn list_for_delivery(&self, delivery_id: Uuid) -> Vec<ReceptionRecord> {
        let mut records = self
            .store
            .receptions
            .filter(|record| record.delivery_id == delivery_id);
        records.sort_by(|a, b| a.received_at.cmp(&b.received_at));
        records
    }

    pub fn list(&self) -> Vec<ReceptionRecord> {
        let mut records = self.store.receptions.all();
        records.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        records
    }
}
